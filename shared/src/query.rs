//! Display-only derivations over fetched items: local-date conversion,
//! the week view's client-side filtering and day grouping, pagination math,
//! and the "server total vs filtered subtotal" switch.

use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate};

use crate::models::StoredItem;

/// All timestamps are stored in UTC and displayed in IST (+05:30).
pub const DISPLAY_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

pub fn display_offset() -> FixedOffset {
    FixedOffset::east_opt(DISPLAY_OFFSET_SECS).expect("IST offset is in range")
}

/// Parses a server `createdAt` timestamp into the display timezone.
pub fn local_datetime(created_at: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(created_at)
        .ok()
        .map(|dt| dt.with_timezone(&display_offset()))
}

/// The calendar date an item falls on, in the display timezone.
pub fn local_date(created_at: &str) -> Option<NaiveDate> {
    local_datetime(created_at).map(|dt| dt.date_naive())
}

/// Secondary, client-side filter applied by the Week view over its single
/// unpaginated fetch. Distinct from the server-side filtering the Month and
/// Overall views use; the two code paths are deliberately separate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeekFilter {
    /// Exact local-date match when set.
    pub date: Option<NaiveDate>,
    /// Case-insensitive substring match on the item name.
    pub search: String,
}

impl WeekFilter {
    /// An active filter switches the displayed total from the server-reported
    /// period total to the locally summed filtered subtotal.
    pub fn is_active(&self) -> bool {
        self.date.is_some() || !self.search.trim().is_empty()
    }

    pub fn matches(&self, item: &StoredItem) -> bool {
        if let Some(selected) = self.date {
            if local_date(&item.created_at) != Some(selected) {
                return false;
            }
        }
        let needle = self.search.trim().to_lowercase();
        needle.is_empty() || item.name.to_lowercase().contains(&needle)
    }
}

pub fn filter_items(items: &[StoredItem], filter: &WeekFilter) -> Vec<StoredItem> {
    items
        .iter()
        .filter(|item| filter.matches(item))
        .cloned()
        .collect()
}

/// Groups items by their local calendar day, preserving the order in which
/// days first appear. Items with an unparseable timestamp are dropped.
pub fn group_by_day(items: &[StoredItem]) -> Vec<(NaiveDate, Vec<StoredItem>)> {
    let mut groups: Vec<(NaiveDate, Vec<StoredItem>)> = Vec::new();
    for item in items {
        let Some(date) = local_date(&item.created_at) else {
            continue;
        };
        match groups.iter_mut().find(|(day, _)| *day == date) {
            Some((_, bucket)) => bucket.push(item.clone()),
            None => groups.push((date, vec![item.clone()])),
        }
    }
    groups
}

pub fn sum_total(items: &[StoredItem]) -> f64 {
    items.iter().map(|item| item.total_price).sum()
}

/// The number the total card shows: the server-reported period total when no
/// filter is active, otherwise the locally summed subset. The two can
/// legitimately differ and must not be conflated.
pub fn displayed_total(server_total: f64, visible: &[StoredItem], filter_active: bool) -> f64 {
    if filter_active {
        sum_total(visible)
    } else {
        server_total
    }
}

pub fn total_pages(total_items: u64, limit: u32) -> u32 {
    if limit == 0 {
        return 0;
    }
    ((total_items + limit as u64 - 1) / limit as u64) as u32
}

/// The week view's date chips: Monday of the current week through today.
/// On a Sunday that is the full Monday-to-Sunday week.
pub fn week_dates(today: NaiveDate) -> Vec<NaiveDate> {
    let days_since_monday = today.weekday().num_days_from_monday() as i64;
    let monday = today - Duration::days(days_since_monday);
    (0..=days_since_monday)
        .map(|offset| monday + Duration::days(offset))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, name: &str, total_price: f64, created_at: &str) -> StoredItem {
        StoredItem {
            id: id.to_string(),
            name: name.to_string(),
            quantity: 1,
            price: total_price,
            total_price,
            created_at: created_at.to_string(),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn local_date_crosses_midnight_in_display_timezone() {
        // 20:00 UTC is 01:30 IST the next day.
        assert_eq!(
            local_date("2025-09-04T20:00:00.000Z"),
            Some(date(2025, 9, 5))
        );
        assert_eq!(
            local_date("2025-09-04T10:00:00.000Z"),
            Some(date(2025, 9, 4))
        );
        assert_eq!(local_date("not a timestamp"), None);
    }

    #[test]
    fn filter_by_exact_local_date() {
        let items = vec![
            item("a", "Tea", 20.0, "2025-09-04T10:00:00.000Z"),
            item("b", "Snacks", 30.0, "2025-09-04T20:00:00.000Z"), // Sep 5 in IST
        ];
        let filter = WeekFilter {
            date: Some(date(2025, 9, 5)),
            search: String::new(),
        };
        let filtered = filter_items(&items, &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "b");
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let items = vec![
            item("a", "Green Tea", 20.0, "2025-09-04T10:00:00.000Z"),
            item("b", "Snacks", 30.0, "2025-09-04T11:00:00.000Z"),
        ];
        let filter = WeekFilter {
            date: None,
            search: "  TEA ".to_string(),
        };
        let filtered = filter_items(&items, &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Green Tea");
    }

    #[test]
    fn blank_search_is_not_an_active_filter() {
        let filter = WeekFilter {
            date: None,
            search: "   ".to_string(),
        };
        assert!(!filter.is_active());
        assert!(WeekFilter {
            date: Some(date(2025, 9, 5)),
            search: String::new(),
        }
        .is_active());
    }

    #[test]
    fn groups_preserve_first_seen_day_order() {
        let items = vec![
            item("a", "Tea", 20.0, "2025-09-02T10:00:00.000Z"),
            item("b", "Milk", 25.0, "2025-09-01T10:00:00.000Z"),
            item("c", "Snacks", 30.0, "2025-09-02T12:00:00.000Z"),
            item("d", "???", 1.0, "bogus"),
        ];
        let groups = group_by_day(&items);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, date(2025, 9, 2));
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].0, date(2025, 9, 1));
    }

    #[test]
    fn displayed_total_switches_on_filter_activity() {
        let visible = vec![
            item("a", "Tea", 20.0, "2025-09-04T10:00:00.000Z"),
            item("b", "Snacks", 30.0, "2025-09-04T11:00:00.000Z"),
        ];
        // Whole-period total comes straight from the server.
        assert_eq!(displayed_total(9000.0, &visible, false), 9000.0);
        // A filtered subset is summed locally, even though the server total
        // is a different number.
        assert_eq!(displayed_total(9000.0, &visible, true), 50.0);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(45, 20), 3);
        assert_eq!(total_pages(40, 20), 2);
        assert_eq!(total_pages(1, 20), 1);
        assert_eq!(total_pages(0, 20), 0);
        assert_eq!(total_pages(10, 0), 0);
    }

    #[test]
    fn week_dates_run_monday_through_today() {
        // 2025-09-03 is a Wednesday.
        let dates = week_dates(date(2025, 9, 3));
        assert_eq!(
            dates,
            vec![date(2025, 9, 1), date(2025, 9, 2), date(2025, 9, 3)]
        );

        // Monday shows just itself.
        assert_eq!(week_dates(date(2025, 9, 1)), vec![date(2025, 9, 1)]);

        // Sunday shows the full week ending on it.
        let sunday = week_dates(date(2025, 9, 7));
        assert_eq!(sunday.len(), 7);
        assert_eq!(sunday[0], date(2025, 9, 1));
        assert_eq!(sunday[6], date(2025, 9, 7));
    }
}

//! Timestamp formatting for display. The backend stores UTC; everything is
//! shown in IST, like the rest of the app.

use chrono::{NaiveDate, Utc};
use shared::query::{display_offset, local_datetime};

/// "05 Sep 2025". Falls back to the raw string when unparseable.
pub fn format_date(created_at: &str) -> String {
    match local_datetime(created_at) {
        Some(dt) => dt.format("%d %b %Y").to_string(),
        None => created_at.to_string(),
    }
}

/// "07:42 pm"
pub fn format_time(created_at: &str) -> String {
    match local_datetime(created_at) {
        Some(dt) => dt.format("%I:%M %P").to_string(),
        None => created_at.to_string(),
    }
}

/// Chip label in the week view, e.g. "5 Sep".
pub fn format_chip(date: NaiveDate) -> String {
    date.format("%-d %b").to_string()
}

/// Day heading in the week view, e.g. "05 Sep 2025".
pub fn format_day_heading(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

/// ISO date string, for `<input type="date">` values and bounds.
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Today's date in the display timezone.
pub fn today() -> NaiveDate {
    Utc::now().with_timezone(&display_offset()).date_naive()
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "January",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_dates_in_display_timezone() {
        // 20:00 UTC rolls over to the next day in IST.
        assert_eq!(format_date("2025-09-04T20:00:00.000Z"), "05 Sep 2025");
        assert_eq!(format_date("2025-09-04T10:00:00.000Z"), "04 Sep 2025");
    }

    #[test]
    fn formats_twelve_hour_times() {
        assert_eq!(format_time("2025-09-04T14:12:00.000Z"), "07:42 pm");
        assert_eq!(format_time("2025-09-04T20:00:00.000Z"), "01:30 am");
    }

    #[test]
    fn unparseable_timestamps_pass_through() {
        assert_eq!(format_date("garbage"), "garbage");
        assert_eq!(format_time("garbage"), "garbage");
    }

    #[test]
    fn chip_label_drops_the_zero_pad() {
        let date = NaiveDate::from_ymd_opt(2025, 9, 5).unwrap();
        assert_eq!(format_chip(date), "5 Sep");
        assert_eq!(format_day_heading(date), "05 Sep 2025");
        assert_eq!(iso_date(date), "2025-09-05");
    }

    #[test]
    fn month_names() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(12), "December");
        assert_eq!(month_name(0), "January");
    }
}

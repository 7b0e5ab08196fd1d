//! The in-progress expense entry form: a batch of editable line items that is
//! submitted to the server in one request.

use crate::models::{CreateItemsRequest, NewItem};

/// One not-yet-submitted row in the expense entry form.
///
/// `id` is local to the form and never reused while editing: new rows always
/// take `max(existing) + 1`. `total` is derived from `quantity * price` and is
/// recomputed on every edit of either operand, never set directly.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub id: u32,
    pub name: String,
    pub quantity: u32,
    pub price: f64,
    pub total: f64,
}

impl LineItem {
    fn blank(id: u32) -> Self {
        Self {
            id,
            name: String::new(),
            quantity: 1,
            price: 0.0,
            total: 0.0,
        }
    }

    fn recompute_total(&mut self) {
        self.total = self.quantity as f64 * self.price;
    }
}

/// The whole batch being edited. Always holds at least one row.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryForm {
    rows: Vec<LineItem>,
}

impl EntryForm {
    /// A fresh form with a single blank row.
    pub fn new() -> Self {
        Self {
            rows: vec![LineItem::blank(1)],
        }
    }

    pub fn rows(&self) -> &[LineItem] {
        &self.rows
    }

    /// Appends a blank row and returns its freshly allocated id.
    pub fn add_row(&mut self) -> u32 {
        let id = self.rows.iter().map(|row| row.id).max().unwrap_or(0) + 1;
        self.rows.push(LineItem::blank(id));
        id
    }

    /// Removes the row with `id`. Refused when only one row remains, so the
    /// form never becomes empty. Returns whether a row was removed.
    pub fn remove_row(&mut self, id: u32) -> bool {
        if self.rows.len() <= 1 {
            return false;
        }
        let before = self.rows.len();
        self.rows.retain(|row| row.id != id);
        self.rows.len() < before
    }

    pub fn set_name(&mut self, id: u32, name: String) {
        if let Some(row) = self.row_mut(id) {
            row.name = name;
        }
    }

    /// Quantity edits keep the `quantity >= 1` invariant and recompute only
    /// that row's total.
    pub fn set_quantity(&mut self, id: u32, quantity: u32) {
        if let Some(row) = self.row_mut(id) {
            row.quantity = quantity.max(1);
            row.recompute_total();
        }
    }

    pub fn set_price(&mut self, id: u32, price: f64) {
        if let Some(row) = self.row_mut(id) {
            row.price = if price.is_finite() { price } else { 0.0 };
            row.recompute_total();
        }
    }

    /// Derived on every call, never cached, so it cannot drift from the rows.
    pub fn grand_total(&self) -> f64 {
        self.rows.iter().map(|row| row.total).sum()
    }

    /// Saving is blocked while any row has a blank name or non-positive price.
    pub fn is_save_disabled(&self) -> bool {
        self.rows
            .iter()
            .any(|row| row.name.trim().is_empty() || row.price <= 0.0)
    }

    /// Back to a single blank row, as after a successful submission.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn to_request(&self) -> CreateItemsRequest {
        CreateItemsRequest {
            items: self
                .rows
                .iter()
                .map(|row| NewItem {
                    name: row.name.clone(),
                    quantity: row.quantity,
                    price: row.price,
                    totalprice: row.total,
                })
                .collect(),
        }
    }

    fn row_mut(&mut self, id: u32) -> Option<&mut LineItem> {
        self.rows.iter_mut().find(|row| row.id == id)
    }
}

impl Default for EntryForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_form_has_one_blank_row_and_save_disabled() {
        let form = EntryForm::new();
        assert_eq!(form.rows().len(), 1);
        assert_eq!(form.rows()[0].quantity, 1);
        assert_eq!(form.rows()[0].price, 0.0);
        assert!(form.is_save_disabled());
        assert_eq!(form.grand_total(), 0.0);
    }

    #[test]
    fn totals_follow_quantity_and_price_edits() {
        let mut form = EntryForm::new();
        form.set_name(1, "Tea".to_string());
        form.set_price(1, 20.0);
        assert!(!form.is_save_disabled());
        assert_eq!(form.rows()[0].total, 20.0);
        assert_eq!(form.grand_total(), 20.0);

        let id = form.add_row();
        assert_eq!(id, 2);
        form.set_name(2, "Snacks".to_string());
        form.set_quantity(2, 2);
        form.set_price(2, 15.0);
        assert_eq!(form.rows()[1].total, 30.0);
        assert_eq!(form.grand_total(), 50.0);

        assert!(form.remove_row(1));
        assert_eq!(form.rows().len(), 1);
        assert_eq!(form.grand_total(), 30.0);
    }

    #[test]
    fn every_partial_edit_updates_totals_and_save_state() {
        // Typing "2" then "20" into the price field is two edits; each one
        // must be reflected immediately, not only once the field is left.
        let mut form = EntryForm::new();
        form.set_name(1, "T".to_string());
        form.set_price(1, 2.0);
        assert_eq!(form.rows()[0].total, 2.0);
        assert_eq!(form.grand_total(), 2.0);
        assert!(!form.is_save_disabled());

        form.set_price(1, 20.0);
        assert_eq!(form.rows()[0].total, 20.0);
        assert_eq!(form.grand_total(), 20.0);

        form.set_quantity(1, 3);
        assert_eq!(form.grand_total(), 60.0);

        form.set_price(1, 0.0);
        assert!(form.is_save_disabled());
    }

    #[test]
    fn editing_one_row_leaves_the_others_untouched() {
        let mut form = EntryForm::new();
        form.set_name(1, "Milk".to_string());
        form.set_price(1, 30.0);
        form.add_row();
        form.set_quantity(2, 4);

        assert_eq!(form.rows()[0].name, "Milk");
        assert_eq!(form.rows()[0].total, 30.0);
        assert_eq!(form.rows()[1].quantity, 4);
    }

    #[test]
    fn removed_ids_are_never_reallocated() {
        let mut form = EntryForm::new();
        form.add_row(); // 2
        form.add_row(); // 3
        assert!(form.remove_row(3));
        // Allocation looks at the current maximum, so id 3 comes back only
        // because it is again max + 1; removing a middle row must not shift
        // anything.
        assert!(form.remove_row(2));
        let id = form.add_row();
        assert_eq!(id, 2);

        let mut form = EntryForm::new();
        form.add_row(); // 2
        form.add_row(); // 3
        assert!(form.remove_row(2));
        assert_eq!(form.add_row(), 4);
    }

    #[test]
    fn remove_keeps_surviving_rows_intact() {
        let mut form = EntryForm::new();
        form.set_name(1, "Tea".to_string());
        form.set_price(1, 20.0);
        form.add_row();
        form.set_name(2, "Snacks".to_string());
        form.set_price(2, 15.0);
        form.add_row();

        assert!(form.remove_row(2));
        let ids: Vec<u32> = form.rows().iter().map(|row| row.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(form.rows()[0].name, "Tea");
        assert_eq!(form.rows()[0].price, 20.0);
    }

    #[test]
    fn last_row_cannot_be_removed() {
        let mut form = EntryForm::new();
        assert!(!form.remove_row(1));
        assert_eq!(form.rows().len(), 1);
    }

    #[test]
    fn quantity_is_clamped_to_at_least_one() {
        let mut form = EntryForm::new();
        form.set_price(1, 10.0);
        form.set_quantity(1, 0);
        assert_eq!(form.rows()[0].quantity, 1);
        assert_eq!(form.rows()[0].total, 10.0);
    }

    #[test]
    fn save_disabled_tracks_every_row() {
        let mut form = EntryForm::new();
        form.set_name(1, "Tea".to_string());
        form.set_price(1, 20.0);
        form.add_row();
        // Second row is still blank.
        assert!(form.is_save_disabled());
        form.set_name(2, "Snacks".to_string());
        assert!(form.is_save_disabled()); // price still 0
        form.set_price(2, 5.0);
        assert!(!form.is_save_disabled());
        form.set_name(2, "   ".to_string());
        assert!(form.is_save_disabled());
    }

    #[test]
    fn reset_returns_to_a_single_blank_row() {
        let mut form = EntryForm::new();
        form.set_name(1, "Tea".to_string());
        form.set_price(1, 20.0);
        form.add_row();
        form.reset();
        assert_eq!(form, EntryForm::new());
    }

    #[test]
    fn request_maps_rows_to_wire_names() {
        let mut form = EntryForm::new();
        form.set_name(1, "Tea".to_string());
        form.set_quantity(1, 3);
        form.set_price(1, 20.0);

        let request = form.to_request();
        assert_eq!(request.items.len(), 1);
        assert_eq!(request.items[0].name, "Tea");
        assert_eq!(request.items[0].quantity, 3);
        assert_eq!(request.items[0].price, 20.0);
        assert_eq!(request.items[0].totalprice, 60.0);
    }
}

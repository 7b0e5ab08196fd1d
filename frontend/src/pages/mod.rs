pub mod analytics;
pub mod expense_entry;
pub mod month;
pub mod overall;
pub mod sign_in;
pub mod sign_up;
pub mod today;
pub mod week;
pub mod welcome;

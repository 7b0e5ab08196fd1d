pub mod use_expense_entry;

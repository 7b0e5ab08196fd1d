pub mod items_table;
pub mod layout;
pub mod pagination;
pub mod sidebar;
pub mod toast;

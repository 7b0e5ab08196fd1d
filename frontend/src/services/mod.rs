pub mod api;
pub mod auth;
pub mod date_utils;
pub mod items;
pub mod notify;
pub mod session;

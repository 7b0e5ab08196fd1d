//! Contracts and client-side logic shared by the expense tracker frontend.
//!
//! Everything here is plain data and pure functions: the wire types for the
//! remote expense API, the in-progress entry form model, and the derivations
//! (filtering, grouping, pagination, totals) the views compute over fetched
//! data. No wasm or UI dependency, so the whole crate tests natively.

pub mod entry;
pub mod models;
pub mod query;
pub mod validation;

pub use entry::{EntryForm, LineItem};
pub use models::{
    AnalyticsSummary, ApiEnvelope, AuthData, ByDateRequest, CreateItemsRequest, ItemListResponse,
    MonthQuery, NewItem, OverallQuery, PagedItemsResponse, SignInRequest, SignUpRequest,
    StoredItem, User,
};
pub use query::{
    display_offset, displayed_total, filter_items, group_by_day, local_date, local_datetime,
    sum_total, total_pages, week_dates, WeekFilter,
};
pub use validation::{validate_sign_in, validate_sign_up, AuthValidationError};

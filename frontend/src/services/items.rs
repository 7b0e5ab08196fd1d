use chrono::NaiveDate;
use shared::{
    AnalyticsSummary, ApiEnvelope, ByDateRequest, EntryForm, ItemListResponse, MonthQuery,
    OverallQuery, PagedItemsResponse, StoredItem,
};

use crate::services::api::ApiClient;

const CREATE_FALLBACK: &str = "Failed to create items";
const ANALYTICS_FALLBACK: &str = "Failed to load analytics";
const TODAY_FALLBACK: &str = "Failed to load today's items";
const WEEK_FALLBACK: &str = "Failed to load this week's items";
const BY_DATE_FALLBACK: &str = "Failed to load items for that date";
const MONTH_FALLBACK: &str = "Failed to load this month's items";
const OVERALL_FALLBACK: &str = "Failed to load overall expenses";

/// Wraps item creation and every read/aggregation query. Each method fails
/// with the server's message when one is present, else the per-operation
/// fallback string; callers only ever see a human-readable message.
#[derive(Clone, PartialEq)]
pub struct ItemService {
    api: ApiClient,
}

impl ItemService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Submits the whole batch as one request; all-or-nothing from the
    /// client's view.
    pub async fn create_items(&self, form: &EntryForm) -> Result<Vec<StoredItem>, String> {
        let envelope: ApiEnvelope<Vec<StoredItem>> = self
            .api
            .post_json("/item/create", &form.to_request())
            .await
            .map_err(|err| err.or_fallback(CREATE_FALLBACK))?;
        envelope.into_result(CREATE_FALLBACK)
    }

    pub async fn get_analytics(&self) -> Result<AnalyticsSummary, String> {
        let envelope: ApiEnvelope<AnalyticsSummary> = self
            .api
            .get_json("/item/analytics")
            .await
            .map_err(|err| err.or_fallback(ANALYTICS_FALLBACK))?;
        envelope.into_result(ANALYTICS_FALLBACK)
    }

    pub async fn get_today(&self) -> Result<ItemListResponse, String> {
        self.api
            .get_json("/item/today")
            .await
            .map_err(|err| err.or_fallback(TODAY_FALLBACK))
    }

    /// The full current week, unpaginated. The week view filters and groups
    /// this client-side.
    pub async fn get_this_week(&self) -> Result<ItemListResponse, String> {
        self.api
            .get_json("/item/week")
            .await
            .map_err(|err| err.or_fallback(WEEK_FALLBACK))
    }

    pub async fn get_by_date(&self, date: NaiveDate) -> Result<ItemListResponse, String> {
        let body = ByDateRequest {
            date: date.format("%Y-%m-%d").to_string(),
        };
        self.api
            .post_json("/item/by-date", &body)
            .await
            .map_err(|err| err.or_fallback(BY_DATE_FALLBACK))
    }

    pub async fn get_this_month(&self, query: &MonthQuery) -> Result<PagedItemsResponse, String> {
        self.api
            .post_json("/item/month", query)
            .await
            .map_err(|err| err.or_fallback(MONTH_FALLBACK))
    }

    pub async fn get_overall(&self, query: &OverallQuery) -> Result<PagedItemsResponse, String> {
        self.api
            .post_json("/item/overall", query)
            .await
            .map_err(|err| err.or_fallback(OVERALL_FALLBACK))
    }
}

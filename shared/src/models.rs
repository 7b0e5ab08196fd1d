use serde::{Deserialize, Serialize};

/// Response envelope used by the `/auth/*` endpoints and the enveloped
/// `/item/*` endpoints (`create`, `analytics`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// Unwraps the envelope into a tagged result. Application-level failures
    /// (`success: false`, or a success with no payload) become an error
    /// carrying the server message when present, else `fallback`.
    pub fn into_result(self, fallback: &str) -> Result<T, String> {
        if self.success {
            if let Some(data) = self.data {
                return Ok(data);
            }
        }
        if self.message.trim().is_empty() {
            Err(fallback.to_string())
        } else {
            Err(self.message)
        }
    }
}

/// The authenticated user's profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Payload returned by both sign-up and sign-in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthData {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// A persisted expense item as the server returns it. Immutable on the
/// client; aggregation views only ever read these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub quantity: u32,
    pub price: f64,
    #[serde(rename = "totalprice")]
    pub total_price: f64,
    /// RFC 3339 timestamp, UTC.
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// One row of a batch submission to `/item/create`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub quantity: u32,
    pub price: f64,
    pub totalprice: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateItemsRequest {
    pub items: Vec<NewItem>,
}

/// Shape of the unpaginated list endpoints (`/item/today`, `/item/week`,
/// `/item/by-date`): the items plus a server-computed period total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemListResponse {
    pub data: Vec<StoredItem>,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ByDateRequest {
    /// ISO date, `YYYY-MM-DD`.
    pub date: String,
}

/// Query for `/item/month`. `date` is sent as an explicit null when unset;
/// when present, server-side date filtering takes precedence over the month
/// scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthQuery {
    pub page: u32,
    pub limit: u32,
    pub search: String,
    pub date: Option<String>,
}

impl Default for MonthQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 20,
            search: String::new(),
            date: None,
        }
    }
}

/// Query for `/item/overall`. Month and year are omitted entirely when unset,
/// meaning unfiltered across all time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallQuery {
    pub page: u32,
    pub limit: u32,
    pub search: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

impl Default for OverallQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 20,
            search: String::new(),
            month: None,
            year: None,
        }
    }
}

/// Shape of the server-paginated endpoints (`/item/month`, `/item/overall`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagedItemsResponse {
    pub data: Vec<StoredItem>,
    #[serde(rename = "totalItems")]
    pub total_items: u64,
    #[serde(rename = "totalPrice")]
    pub total_price: f64,
    #[serde(rename = "currentPage")]
    pub current_page: u32,
    #[serde(rename = "pageSize")]
    pub page_size: u32,
}

/// Read-only spending aggregates from `/item/analytics`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    pub today: f64,
    pub week: f64,
    pub month: f64,
    pub overall: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_unwraps_payload_on_success() {
        let envelope = ApiEnvelope {
            success: true,
            message: "ok".to_string(),
            data: Some(7u32),
        };
        assert_eq!(envelope.into_result("fallback"), Ok(7));
    }

    #[test]
    fn envelope_failure_uses_server_message() {
        let envelope: ApiEnvelope<u32> = ApiEnvelope {
            success: false,
            message: "Item limit exceeded".to_string(),
            data: None,
        };
        assert_eq!(
            envelope.into_result("fallback"),
            Err("Item limit exceeded".to_string())
        );
    }

    #[test]
    fn envelope_failure_without_message_uses_fallback() {
        let envelope: ApiEnvelope<u32> = ApiEnvelope {
            success: false,
            message: "  ".to_string(),
            data: None,
        };
        assert_eq!(
            envelope.into_result("Failed to create items"),
            Err("Failed to create items".to_string())
        );
    }

    #[test]
    fn envelope_success_without_payload_is_an_error() {
        let envelope: ApiEnvelope<u32> = ApiEnvelope {
            success: true,
            message: String::new(),
            data: None,
        };
        assert!(envelope.into_result("fallback").is_err());
    }

    #[test]
    fn stored_item_decodes_server_field_names() {
        let json = r#"{
            "_id": "64f1c0",
            "name": "Tea",
            "quantity": 2,
            "price": 10.0,
            "totalprice": 20.0,
            "createdAt": "2025-09-04T14:30:00.000Z"
        }"#;
        let item: StoredItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, "64f1c0");
        assert_eq!(item.total_price, 20.0);
        assert_eq!(item.created_at, "2025-09-04T14:30:00.000Z");
    }

    #[test]
    fn paged_response_decodes_server_field_names() {
        let json = r#"{
            "data": [],
            "totalItems": 45,
            "totalPrice": 9000.0,
            "currentPage": 1,
            "pageSize": 20
        }"#;
        let page: PagedItemsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(page.total_items, 45);
        assert_eq!(page.total_price, 9000.0);
    }

    #[test]
    fn overall_query_omits_unset_month_and_year() {
        let query = OverallQuery {
            search: "tea".to_string(),
            ..OverallQuery::default()
        };
        let json = serde_json::to_value(&query).unwrap();
        assert!(json.get("month").is_none());
        assert!(json.get("year").is_none());
        assert_eq!(json["page"], 1);

        let filtered = OverallQuery {
            month: Some(9),
            year: Some(2025),
            ..OverallQuery::default()
        };
        let json = serde_json::to_value(&filtered).unwrap();
        assert_eq!(json["month"], 9);
        assert_eq!(json["year"], 2025);
    }

    #[test]
    fn month_query_sends_explicit_null_date() {
        let json = serde_json::to_value(MonthQuery::default()).unwrap();
        assert!(json["date"].is_null());
    }
}

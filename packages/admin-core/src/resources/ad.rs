//! Advertisements. The catalog endpoint pages with skip/limit and returns a
//! bare array without a count.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{items, Draft, NamedRef, Resource};
use crate::api::ApiRequest;
use crate::controller::{ControllerConfig, Page};
use crate::error::{require, ValidationError};

pub const FILTER_STATUS: &str = "status";

/// Review status of an ad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdStatus {
    Pending,
    Approved,
    Rejected,
}

impl AdStatus {
    pub const ALL: [AdStatus; 3] = [AdStatus::Pending, AdStatus::Approved, AdStatus::Rejected];

    pub fn as_str(&self) -> &'static str {
        match self {
            AdStatus::Pending => "Pending",
            AdStatus::Approved => "Approved",
            AdStatus::Rejected => "Rejected",
        }
    }

    /// Parse a dropdown value; "All" and unknown values mean no filter.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ad {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub business_name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_by: Option<NamedRef>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Ad {
    pub fn creator_name(&self) -> &str {
        self.created_by.as_ref().map(|c| c.name.as_str()).unwrap_or("")
    }
}

impl Resource for Ad {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Fields of the create form. Every field is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdDraft {
    pub business_name: String,
    pub title: String,
    pub link: String,
    pub description: String,
    pub address: String,
}

impl Draft for AdDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.business_name, "Business name")?;
        require(&self.title, "Title")?;
        require(&self.link, "Link")?;
        require(&self.description, "Description")?;
        require(&self.address, "Address")
    }
}

pub fn list_config() -> ControllerConfig<Ad> {
    ControllerConfig::new(
        "ads",
        |query| {
            let status = query
                .filter_text(FILTER_STATUS)
                .and_then(AdStatus::parse)
                .map(|s| s.as_str())
                .unwrap_or("");
            ApiRequest::get("/add/get-all")
                .query("status", status)
                .query("skip", query.offset())
                .query("limit", query.page_size())
        },
        |body: Value, query| Ok(Page::open_ended(items(body, "ads")?, query)),
    )
    .public()
    .on_create(|body| ApiRequest::post("/add/create").json(body))
    .on_delete(|id| ApiRequest::delete(format!("/add/{id}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{FilterValue, ResourceQuery};
    use serde_json::json;

    #[test]
    fn test_request_uses_skip_and_limit() {
        let config = list_config();
        let mut query = ResourceQuery::new(10);
        query.set_filter(FILTER_STATUS, FilterValue::text("approved"));
        query.set_page(3);

        let request = config.request_for(&query);
        assert_eq!(request.query_value("status"), Some("Approved"));
        assert_eq!(request.query_value("skip"), Some("20"));
        assert_eq!(request.query_value("limit"), Some("10"));
    }

    #[test]
    fn test_all_status_is_no_filter() {
        assert_eq!(AdStatus::parse("All"), None);
        let config = list_config();
        let mut query = ResourceQuery::new(10);
        query.set_filter(FILTER_STATUS, FilterValue::text("All"));
        assert_eq!(config.request_for(&query).query_value("status"), Some(""));
    }

    #[test]
    fn test_adapter_reads_bare_array() {
        let config = list_config();
        let body = json!([{
            "_id": "a1",
            "businessName": "Cafe",
            "title": "Coffee",
            "createdBy": {"name": "Bob"},
            "createdAt": "2024-05-01T10:00:00Z"
        }]);
        let page = config.adapt(body, &ResourceQuery::new(10)).unwrap();
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.items[0].business_name, "Cafe");
        assert_eq!(page.items[0].creator_name(), "Bob");
        assert!(page.items[0].created_at.is_some());
    }

    #[test]
    fn test_every_field_is_required() {
        let draft = AdDraft {
            business_name: "Cafe".into(),
            title: "Coffee".into(),
            link: "https://cafe.example".into(),
            description: "Fresh".into(),
            address: String::new(),
        };
        assert_eq!(draft.validate(), Err(ValidationError::Required("Address")));
    }
}

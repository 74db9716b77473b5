//! Publisher applications waiting for an admin decision.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{items, page_count, Draft, Resource};
use crate::api::ApiRequest;
use crate::controller::{ControllerConfig, Page};
use crate::error::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleRequest {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub contact: String,
    /// `applied`, `approved` or `rejected`
    #[serde(default)]
    pub verification_status: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl RoleRequest {
    pub fn is_pending(&self) -> bool {
        self.verification_status
            .as_deref()
            .map_or(true, |status| status.eq_ignore_ascii_case("applied"))
    }
}

impl Resource for RoleRequest {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Decision on one application. The API calls approval `accepted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum RoleDecision {
    Accepted,
    Rejected,
}

impl RoleDecision {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleDecision::Accepted => "accepted",
            RoleDecision::Rejected => "rejected",
        }
    }
}

impl Draft for RoleDecision {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

pub fn list_config() -> ControllerConfig<RoleRequest> {
    ControllerConfig::new(
        "role-requests",
        |query| ApiRequest::get("/users/publisher-requests").query("page", query.page()),
        |body: Value, query| {
            let total_pages = page_count(&body, "totalPages");
            Ok(Page::reported_or_open_ended(
                items(body, "applications")?,
                total_pages,
                query,
            ))
        },
    )
    // The decision travels in the query string, not the body.
    .on_update(|id, body| {
        let status = body.get("status").and_then(Value::as_str).unwrap_or("");
        ApiRequest::patch(format!("/users/update-request/{id}")).query("status", status)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::ResourceQuery;
    use serde_json::json;

    #[test]
    fn test_decision_goes_into_query_string() {
        let config = list_config();
        let body = serde_json::to_value(RoleDecision::Accepted).unwrap();
        assert_eq!(body, json!({"status": "accepted"}));

        let request = (config.update.as_ref().unwrap())("r1", body);
        assert_eq!(request.path, "/users/update-request/r1");
        assert_eq!(request.query_value("status"), Some("accepted"));
        assert_eq!(request.body, None);
    }

    #[test]
    fn test_missing_total_pages_stays_open_ended() {
        let config = list_config();
        let applications: Vec<Value> = (0..10)
            .map(|i| json!({"_id": format!("r{i}"), "verificationStatus": "applied"}))
            .collect();
        let page = config
            .adapt(json!({ "applications": applications }), &ResourceQuery::new(10))
            .unwrap();
        assert_eq!(page.total_pages, 2);
        assert!(page.items[0].is_pending());

        let reported = config
            .adapt(json!({"applications": [], "totalPages": 3}), &ResourceQuery::new(10))
            .unwrap();
        assert_eq!(reported.total_pages, 3);
    }
}

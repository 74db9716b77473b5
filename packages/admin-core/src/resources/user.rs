//! Registered users. Plain listing is paged by the server; a non-blank
//! search switches to the search endpoint, which returns a single page.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{items, page_count, Resource};
use crate::api::ApiRequest;
use crate::controller::{ControllerConfig, Page};

/// User search hits a heavier endpoint, so it waits longer.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Resource for User {
    fn id(&self) -> &str {
        &self.id
    }
}

pub fn list_config() -> ControllerConfig<User> {
    ControllerConfig::new(
        "users",
        |query| match query.search_term() {
            Some(term) => ApiRequest::get("/admin/search-users").query("search", term),
            None => ApiRequest::get("/admin/all-users")
                .query("page", query.page())
                .query("limit", query.page_size()),
        },
        |body: Value, query| {
            if query.search_term().is_some() {
                return Ok(Page::new(items(body, "users")?, 1));
            }
            let total_pages = page_count(&body, "totalPages").unwrap_or(1);
            Ok(Page::new(items(body, "users")?, total_pages))
        },
    )
    .debounce(SEARCH_DEBOUNCE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::ResourceQuery;
    use serde_json::json;

    #[test]
    fn test_search_switches_endpoint() {
        let config = list_config();
        let mut query = ResourceQuery::new(10);
        query.set_page(2);
        let listing = config.request_for(&query);
        assert_eq!(listing.path, "/admin/all-users");
        assert_eq!(listing.query_value("page"), Some("2"));

        query.set_search_text("  ann ");
        let search = config.request_for(&query);
        assert_eq!(search.path, "/admin/search-users");
        assert_eq!(search.query_value("search"), Some("ann"));
        assert_eq!(config.debounce_window(), SEARCH_DEBOUNCE);
    }

    #[test]
    fn test_search_results_are_one_page() {
        let config = list_config();
        let mut query = ResourceQuery::new(10);
        query.set_search_text("ann");
        let body = json!({"users": [{"_id": "u1", "name": "Ann", "email": "ann@example.com"}], "totalPages": 5});
        let page = config.adapt(body, &query).unwrap();
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.items[0].role, None);
    }

    #[test]
    fn test_listing_reads_total_pages() {
        let config = list_config();
        let body = json!({"users": [], "totalPages": 5});
        let page = config.adapt(body, &ResourceQuery::new(10)).unwrap();
        assert_eq!(page.total_pages, 5);
    }
}

//! Site-wide totals shown on the admin dashboard.

use serde::{Deserialize, Serialize};

use crate::api::{ApiClient, ApiRequest};
use crate::error::Result;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub total_users: u64,
    #[serde(default)]
    pub total_users_today: u64,
    #[serde(default)]
    pub total_posts_today: u64,
    #[serde(default)]
    pub total_posts_this_month: u64,
    #[serde(default)]
    pub total_posts_this_year: u64,
}

pub fn request() -> ApiRequest {
    ApiRequest::get("/admin/dashboard")
}

pub async fn fetch(client: &ApiClient) -> Result<DashboardStats> {
    client.fetch_json(&request(), true).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_totals_default_to_zero() {
        let stats: DashboardStats = serde_json::from_value(json!({
            "totalUsers": 42,
            "totalPostsThisMonth": 7
        }))
        .unwrap();
        assert_eq!(stats.total_users, 42);
        assert_eq!(stats.total_posts_this_month, 7);
        assert_eq!(stats.total_posts_today, 0);
    }
}

//! Resource helpers that talk to the API outside a list controller.

mod common;

use admin_core::resources::permission;
use admin_core::resources::role_request::{self, RoleDecision};
use admin_core::resources::{category, dashboard};
use admin_core::{ApiError, Method};
use serde_json::json;

use crate::common::{categories, MockTransport, TestHarness};

#[tokio::test]
async fn category_fetch_all_returns_every_category() {
    let transport =
        MockTransport::new().with_json(Method::Get, "/categories", categories(&["c1", "c2"]));
    let harness = TestHarness::signed_in(transport, "publisher", "Pat");

    let all = category::fetch_all(&harness.client).await.unwrap();

    let names: Vec<_> = all.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Category c1", "Category c2"]);
}

#[tokio::test]
async fn dashboard_requires_a_bearer_token() {
    let transport = MockTransport::new().with_json(
        Method::Get,
        "/admin/dashboard",
        json!({ "totalUsers": 42, "totalPostsToday": 3 }),
    );
    let harness = TestHarness::signed_in(transport, "admin", "Alice");

    let stats = dashboard::fetch(&harness.client).await.unwrap();

    assert_eq!(stats.total_users, 42);
    assert_eq!(stats.total_posts_today, 3);
    let calls = harness.transport.calls_to(Method::Get, "/admin/dashboard");
    assert!(calls[0].bearer.is_some());
}

#[tokio::test]
async fn permission_find_scans_the_staff_list() {
    let transport = MockTransport::new().with_json(
        Method::Get,
        "/admin/management-roles",
        json!({ "users": [
            { "_id": "u1", "name": "Ed", "email": "ed@example.com", "role": "editor" },
            { "_id": "u2", "name": "Root", "email": "root@example.com", "role": "admin" }
        ]}),
    );
    let harness = TestHarness::signed_in(transport, "admin", "Alice");

    let found = permission::find(&harness.client, "u2").await.unwrap();
    assert_eq!(found.map(|a| a.email), Some("root@example.com".to_string()));

    let missing = permission::find(&harness.client, "u9").await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn role_decision_is_sent_as_a_query_parameter() {
    let transport = MockTransport::new()
        .with_json(
            Method::Get,
            "/users/publisher-requests",
            json!({ "applications": [], "totalPages": 1 }),
        )
        .with_json(
            Method::Patch,
            "/users/update-request/r1",
            json!({ "message": "Request accepted" }),
        );
    let harness = TestHarness::signed_in(transport, "admin", "Alice");
    let controller = harness.controller(role_request::list_config());

    let message = controller.update("r1", &RoleDecision::Accepted).await.unwrap();

    assert_eq!(message, "Request accepted");
    let calls = harness.transport.calls_to(Method::Patch, "/users/update-request/r1");
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].request.query_value("status"), Some("accepted"));
    assert!(calls[0].request.body.is_none());
    // Refetched after the write
    assert_eq!(
        harness.transport.call_count(Method::Get, "/users/publisher-requests"),
        1
    );
}

#[tokio::test]
async fn anonymous_sessions_get_unauthorized_from_protected_helpers() {
    let transport = MockTransport::new().with_status(
        Method::Get,
        "/admin/dashboard",
        401,
        json!({ "message": "Unauthorized" }),
    );
    let harness = TestHarness::new(transport);

    let err = dashboard::fetch(&harness.client).await.unwrap_err();
    assert!(err.is_unauthorized());
    assert!(matches!(err, ApiError::Http { status: 401, .. }));
}

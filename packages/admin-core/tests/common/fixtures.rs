//! Tokens and records used across tests.

#![allow(dead_code)]

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{Duration, Utc};
use serde_json::{json, Value};

/// Unsigned token carrying `payload`.
pub fn token_with(payload: Value) -> String {
    format!(
        "{}.{}.test-signature",
        URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
        URL_SAFE_NO_PAD.encode(payload.to_string())
    )
}

/// Token for `role`/`name` that expires in a day.
pub fn token_for(role: &str, name: &str) -> String {
    let exp = (Utc::now() + Duration::days(1)).timestamp();
    token_with(json!({ "role": role, "name": name, "exp": exp }))
}

pub fn category(id: &str, name: &str) -> Value {
    json!({ "_id": id, "name": name, "description": "" })
}

pub fn categories(ids: &[&str]) -> Value {
    json!({
        "categories": ids.iter().map(|id| category(id, &format!("Category {id}"))).collect::<Vec<_>>()
    })
}

pub fn post(id: &str, title: &str, author: &str) -> Value {
    json!({
        "_id": id,
        "title": title,
        "category": { "_id": "c1", "name": "News" },
        "featured": false,
        "likes": 0,
        "views": 0,
        "author": { "name": author }
    })
}

pub fn posts_page(posts: Vec<Value>, total_pages: u32) -> Value {
    json!({ "success": true, "posts": posts, "totalPages": total_pages })
}

pub fn users_page(ids: &[&str], total_pages: u32) -> Value {
    json!({
        "users": ids
            .iter()
            .map(|id| json!({ "_id": id, "name": format!("User {id}"), "email": format!("{id}@example.com"), "role": "user" }))
            .collect::<Vec<_>>(),
        "totalPages": total_pages
    })
}

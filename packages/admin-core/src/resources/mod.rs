//! Resource definitions: record types, list configurations and drafts for
//! every collection the console manages.

pub mod ad;
pub mod category;
pub mod dashboard;
pub mod permission;
pub mod post;
pub mod role_request;
pub mod user;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ApiError, Result, ValidationError};

/// A record shown as one row of a list.
pub trait Resource: Clone + Send + Sync + 'static {
    fn id(&self) -> &str;
}

/// A create or update payload. Validation runs before any request is sent.
pub trait Draft: Serialize {
    fn validate(&self) -> std::result::Result<(), ValidationError>;
}

/// `{ "name": ... }` sub-document, as used for authors and creators.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRef {
    #[serde(default)]
    pub name: String,
}

/// Deserialize the array under `key`, or the body itself when it is an
/// array. A missing or null field is an empty list.
pub(crate) fn items<T: DeserializeOwned>(body: Value, key: &str) -> Result<Vec<T>> {
    let list = match body {
        Value::Array(_) => body,
        Value::Object(mut map) => map.remove(key).unwrap_or(Value::Null),
        Value::Null => Value::Null,
        other => {
            return Err(ApiError::Parse(format!(
                "expected an object with `{key}`, got {other}"
            )))
        }
    };

    if list.is_null() {
        return Ok(Vec::new());
    }
    serde_json::from_value(list).map_err(|e| ApiError::Parse(e.to_string()))
}

/// Positive `totalPages`-style count, if the body carries one.
pub(crate) fn page_count(body: &Value, key: &str) -> Option<u32> {
    body.get(key)
        .and_then(Value::as_u64)
        .filter(|n| *n > 0)
        .map(|n| u32::try_from(n).unwrap_or(u32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_items_from_wrapped_or_bare_array() {
        let wrapped: Vec<NamedRef> = items(json!({"users": [{"name": "A"}]}), "users").unwrap();
        assert_eq!(wrapped[0].name, "A");

        let bare: Vec<NamedRef> = items(json!([{"name": "B"}]), "users").unwrap();
        assert_eq!(bare[0].name, "B");

        let missing: Vec<NamedRef> = items(json!({"success": true}), "users").unwrap();
        assert!(missing.is_empty());
    }

    #[test]
    fn test_items_rejects_scalars() {
        let result: Result<Vec<NamedRef>> = items(json!("nope"), "users");
        assert!(matches!(result, Err(ApiError::Parse(_))));
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(&json!({"totalPages": 4}), "totalPages"), Some(4));
        assert_eq!(page_count(&json!({"totalPages": 0}), "totalPages"), None);
        assert_eq!(page_count(&json!({}), "totalPages"), None);
    }
}

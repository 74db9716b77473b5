//! Staff accounts and their roles.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{items, Draft, Resource};
use crate::access::{is_staff_role, STAFF_ROLES};
use crate::api::{ApiClient, ApiRequest};
use crate::config::ClientConfig;
use crate::controller::{ControllerConfig, Page};
use crate::error::{require, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffAccount {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
}

impl Resource for StaffAccount {
    fn id(&self) -> &str {
        &self.id
    }
}

/// New staff account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StaffDraft {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

impl Draft for StaffDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.name, "Name")?;
        require(&self.email, "Email")?;
        require(&self.password, "Password")?;
        require(&self.role, "Role")?;
        check_role(&self.role)
    }
}

/// Role change for an existing account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleChange {
    pub role: String,
}

impl RoleChange {
    pub fn new(role: impl Into<String>) -> Self {
        Self { role: role.into() }
    }
}

impl Draft for RoleChange {
    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.role, "Role")?;
        check_role(&self.role)
    }
}

fn check_role(role: &str) -> Result<(), ValidationError> {
    if is_staff_role(role.trim()) {
        return Ok(());
    }
    Err(ValidationError::Invalid {
        field: "Role",
        reason: format!("expected one of {}", STAFF_ROLES.join(", ")),
    })
}

/// Reject deleting an account the deployment marks as protected.
pub fn ensure_deletable(account: &StaffAccount, config: &ClientConfig) -> Result<(), ValidationError> {
    if config.is_protected_account(&account.email) {
        return Err(ValidationError::Invalid {
            field: "Account",
            reason: format!("{} is protected and cannot be deleted", account.email),
        });
    }
    Ok(())
}

fn list_request() -> ApiRequest {
    ApiRequest::get("/admin/management-roles")
}

/// Look up one staff account. The API has no single-account endpoint, so
/// this scans the full list.
pub async fn find(client: &ApiClient, id: &str) -> crate::error::Result<Option<StaffAccount>> {
    let body = client.execute(&list_request(), true).await?;
    Ok(items::<StaffAccount>(body, "users")?
        .into_iter()
        .find(|account| account.id == id))
}

pub fn list_config() -> ControllerConfig<StaffAccount> {
    ControllerConfig::new(
        "permissions",
        |_| list_request(),
        |body: Value, query| Ok(Page::slice(items(body, "users")?, query)),
    )
    .on_create(|body| ApiRequest::post("/admin/create-user").json(body))
    .on_update(|id, body| ApiRequest::patch(format!("/admin/change-role/{id}")).json(body))
    .on_delete(|id| ApiRequest::delete(format!("/admin/delete-user/{id}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::ResourceQuery;
    use serde_json::json;

    #[test]
    fn test_draft_requires_every_field() {
        let draft = StaffDraft {
            name: "Eve".into(),
            email: "eve@example.com".into(),
            password: String::new(),
            role: "editor".into(),
        };
        assert_eq!(draft.validate(), Err(ValidationError::Required("Password")));
    }

    #[test]
    fn test_unknown_role_is_invalid() {
        assert!(RoleChange::new("Editor").validate().is_ok());
        assert!(matches!(
            RoleChange::new("owner").validate(),
            Err(ValidationError::Invalid { field: "Role", .. })
        ));
        assert_eq!(
            RoleChange::new("").validate(),
            Err(ValidationError::Required("Role"))
        );
    }

    #[test]
    fn test_protected_account_cannot_be_deleted() {
        let mut config = ClientConfig::new("http://localhost");
        config.protected_accounts = vec!["root@example.com".into()];
        let account = StaffAccount {
            id: "u1".into(),
            name: "Root".into(),
            email: "Root@Example.com".into(),
            role: "admin".into(),
        };
        assert!(ensure_deletable(&account, &config).is_err());

        let other = StaffAccount {
            email: "eve@example.com".into(),
            ..account
        };
        assert!(ensure_deletable(&other, &config).is_ok());
    }

    #[test]
    fn test_adapter_pages_locally() {
        let users: Vec<Value> = (0..15)
            .map(|i| json!({"_id": format!("u{i}"), "email": format!("u{i}@example.com"), "role": "editor"}))
            .collect();
        let page = list_config()
            .adapt(json!({ "users": users }), &ResourceQuery::new(10))
            .unwrap();
        assert_eq!(page.items.len(), 10);
        assert_eq!(page.total_pages, 2);
    }
}

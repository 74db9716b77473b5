//! Post categories. The endpoint returns the whole collection, so paging
//! happens on the client.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{items, Draft, Resource};
use crate::api::{ApiClient, ApiRequest};
use crate::controller::{ControllerConfig, Page};
use crate::error::{require, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl Resource for Category {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Body of the add and update forms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryDraft {
    pub name: String,
    pub description: String,
}

impl CategoryDraft {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

impl From<&Category> for CategoryDraft {
    fn from(category: &Category) -> Self {
        Self::new(category.name.clone(), category.description.clone())
    }
}

impl Draft for CategoryDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.name, "Category name")
    }
}

pub fn list_config() -> ControllerConfig<Category> {
    ControllerConfig::new(
        "categories",
        |_| ApiRequest::get("/categories"),
        |body: Value, query| Ok(Page::slice(items(body, "categories")?, query)),
    )
    .on_create(|body| ApiRequest::post("/categories/add-category").json(body))
    .on_update(|id, body| ApiRequest::put(format!("/categories/update-category/{id}")).json(body))
    .on_delete(|id| ApiRequest::delete(format!("/categories/delete-category/{id}")))
}

/// Every category, for the dropdowns of other screens.
pub fn all_request() -> ApiRequest {
    ApiRequest::get("/categories")
}

pub async fn fetch_all(client: &ApiClient) -> crate::error::Result<Vec<Category>> {
    let body = client.execute(&all_request(), true).await?;
    items(body, "categories")
}

//! Blog posts. Listing is public and paged by the server; title and author
//! are free-text filters.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{page_count, Draft, NamedRef, Resource};
use crate::api::ApiRequest;
use crate::controller::{ControllerConfig, Page};
use crate::error::{require, ApiError, ValidationError, GENERIC_FAILURE_MESSAGE};
use crate::session::SessionState;

/// Dropdown value meaning "no category filter".
pub const ALL_CATEGORIES: &str = "All";

pub const FILTER_CATEGORY: &str = "category";
pub const FILTER_AUTHOR: &str = "author";
pub const FILTER_FEATURED: &str = "featured";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub category: Option<CategoryRef>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub author: Option<NamedRef>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

impl Post {
    pub fn author_name(&self) -> &str {
        self.author.as_ref().map(|a| a.name.as_str()).unwrap_or("")
    }

    pub fn category_name(&self) -> &str {
        self.category.as_ref().map(|c| c.name.as_str()).unwrap_or("")
    }
}

impl Resource for Post {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PostList {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    posts: Vec<Post>,
    #[serde(default)]
    message: Option<String>,
}

/// Fields of the edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    /// Category id
    pub category: String,
    pub featured: bool,
    pub tags: Vec<String>,
}

impl From<&Post> for PostDraft {
    fn from(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            content: post.content.clone(),
            category: post
                .category
                .as_ref()
                .map(|c| c.id.clone())
                .unwrap_or_default(),
            featured: post.featured,
            tags: post.tags.clone(),
        }
    }
}

impl Draft for PostDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.title, "Title")
    }
}

pub fn list_config() -> ControllerConfig<Post> {
    ControllerConfig::new(
        "posts",
        |query| {
            let category = query
                .filter_text(FILTER_CATEGORY)
                .filter(|c| *c != ALL_CATEGORIES)
                .unwrap_or("");
            let featured = if query.flag(FILTER_FEATURED) { "true" } else { "" };

            ApiRequest::get("/posts")
                .query("category", category)
                .query("page", query.page())
                .query("title", query.search_term().unwrap_or(""))
                .query("featured", featured)
                .query("author", query.filter_text(FILTER_AUTHOR).unwrap_or(""))
        },
        adapt,
    )
    .public()
    .on_update(|id, body| ApiRequest::patch(format!("/posts/{id}")).json(body))
    .on_delete(|id| ApiRequest::delete(format!("/posts/{id}")))
}

fn adapt(body: Value, _query: &crate::query::ResourceQuery) -> crate::error::Result<Page<Post>> {
    let total_pages = page_count(&body, "totalPages").unwrap_or(1);
    let list: PostList =
        serde_json::from_value(body).map_err(|e| ApiError::Parse(e.to_string()))?;

    if !list.success {
        return Err(ApiError::Parse(
            list.message
                .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string()),
        ));
    }
    Ok(Page::new(list.posts, total_pages))
}

/// Full post for the edit form.
pub fn detail_request(id: &str) -> ApiRequest {
    ApiRequest::get(format!("/posts/{id}"))
}

/// Posts the session may see. Publishers only see their own.
pub fn visible_to<'a>(posts: &'a [Post], session: &'a SessionState) -> impl Iterator<Item = &'a Post> {
    let publisher = session
        .role()
        .is_some_and(|role| role.eq_ignore_ascii_case("publisher"));
    let name = session.display_name().unwrap_or("");
    posts
        .iter()
        .filter(move |post| !publisher || post.author_name() == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{FilterValue, ResourceQuery};
    use serde_json::json;

    #[test]
    fn test_request_carries_every_filter() {
        let config = list_config();
        let mut query = ResourceQuery::new(10);
        query.set_filter(FILTER_CATEGORY, FilterValue::text(ALL_CATEGORIES));
        query.set_filter(FILTER_FEATURED, FilterValue::Flag(true));
        query.set_filter(FILTER_AUTHOR, FilterValue::text("Alice"));
        query.set_search_text("rust");
        query.set_page(3);

        let request = config.request_for(&query);
        assert_eq!(request.path, "/posts");
        assert_eq!(request.query_value("category"), Some(""));
        assert_eq!(request.query_value("page"), Some("3"));
        assert_eq!(request.query_value("title"), Some("rust"));
        assert_eq!(request.query_value("featured"), Some("true"));
        assert_eq!(request.query_value("author"), Some("Alice"));
        assert!(!config.is_authenticated());
    }

    #[test]
    fn test_adapter_reads_server_pages() {
        let body = json!({
            "success": true,
            "totalPages": 4,
            "posts": [{
                "_id": "p1",
                "title": "Hello",
                "category": {"_id": "c1", "name": "News"},
                "featured": true,
                "likes": 3,
                "views": 10,
                "author": {"name": "Alice"}
            }]
        });
        let page = adapt(body, &ResourceQuery::new(10)).unwrap();
        assert_eq!(page.total_pages, 4);
        assert_eq!(page.items[0].category_name(), "News");
        assert_eq!(page.items[0].author_name(), "Alice");
    }

    #[test]
    fn test_adapter_rejects_unsuccessful_body() {
        let err = adapt(json!({"success": false, "message": "Boom"}), &ResourceQuery::new(10))
            .unwrap_err();
        assert_eq!(err, ApiError::Parse("Boom".into()));
    }

    #[test]
    fn test_draft_from_post_uses_category_id() {
        let post: Post = serde_json::from_value(json!({
            "id": "p1",
            "title": "Hello",
            "content": "Body",
            "category": {"_id": "c9", "name": "News"},
            "tags": ["rust"]
        }))
        .unwrap();
        let draft = PostDraft::from(&post);
        assert_eq!(draft.category, "c9");
        assert!(draft.validate().is_ok());

        let blank = PostDraft {
            title: String::new(),
            ..draft
        };
        assert_eq!(blank.validate(), Err(ValidationError::Required("Title")));
    }
}

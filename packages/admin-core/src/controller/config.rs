//! Per-resource controller configuration and page normalization.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;

use crate::api::ApiRequest;
use crate::error::Result;
use crate::query::ResourceQuery;

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const DEFAULT_DEBOUNCE_WINDOW: Duration = Duration::from_millis(500);

pub type EndpointBuilder = Arc<dyn Fn(&ResourceQuery) -> ApiRequest + Send + Sync>;
pub type ResponseAdapter<R> = Arc<dyn Fn(Value, &ResourceQuery) -> Result<Page<R>> + Send + Sync>;
pub type CreateBuilder = Arc<dyn Fn(Value) -> ApiRequest + Send + Sync>;
pub type UpdateBuilder = Arc<dyn Fn(&str, Value) -> ApiRequest + Send + Sync>;
pub type DeleteBuilder = Arc<dyn Fn(&str) -> ApiRequest + Send + Sync>;

/// One page of a list, normalized from whatever shape the endpoint returns.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<R> {
    pub items: Vec<R>,
    pub total_pages: u32,
}

impl<R> Page<R> {
    pub fn new(items: Vec<R>, total_pages: u32) -> Self {
        Self {
            items,
            total_pages: total_pages.max(1),
        }
    }

    /// Paging computed on the client: the endpoint returned the whole
    /// collection and we cut out the requested page.
    pub fn slice(all: Vec<R>, query: &ResourceQuery) -> Self {
        let page_size = query.page_size() as usize;
        let total_pages = all.len().div_ceil(page_size).max(1);
        let items = all
            .into_iter()
            .skip(usize::try_from(query.offset()).unwrap_or(usize::MAX))
            .take(page_size)
            .collect();
        Self::new(items, u32::try_from(total_pages).unwrap_or(u32::MAX))
    }

    /// Server-side paging without a count: a full page means there may be
    /// another one after it.
    pub fn open_ended(items: Vec<R>, query: &ResourceQuery) -> Self {
        let full = items.len() >= query.page_size() as usize;
        let total_pages = if full {
            query.page().saturating_add(1)
        } else {
            query.page()
        };
        Self::new(items, total_pages)
    }

    /// Server-reported page count, falling back to [`open_ended`](Self::open_ended)
    /// when the endpoint left it out.
    pub fn reported_or_open_ended(items: Vec<R>, total_pages: Option<u32>, query: &ResourceQuery) -> Self {
        match total_pages {
            Some(total) => Self::new(items, total),
            None => Self::open_ended(items, query),
        }
    }
}

/// Everything resource-specific a [`ResourceListController`] needs.
///
/// [`ResourceListController`]: super::ResourceListController
pub struct ControllerConfig<R> {
    pub(crate) name: &'static str,
    pub(crate) endpoint: EndpointBuilder,
    pub(crate) adapter: ResponseAdapter<R>,
    pub(crate) page_size: u32,
    pub(crate) debounce_window: Duration,
    pub(crate) authenticated: bool,
    pub(crate) create: Option<CreateBuilder>,
    pub(crate) update: Option<UpdateBuilder>,
    pub(crate) delete: Option<DeleteBuilder>,
}

impl<R> Clone for ControllerConfig<R> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            endpoint: self.endpoint.clone(),
            adapter: self.adapter.clone(),
            page_size: self.page_size,
            debounce_window: self.debounce_window,
            authenticated: self.authenticated,
            create: self.create.clone(),
            update: self.update.clone(),
            delete: self.delete.clone(),
        }
    }
}

impl<R> ControllerConfig<R> {
    /// Authenticated list with the default page size and debounce window.
    pub fn new(
        name: &'static str,
        endpoint: impl Fn(&ResourceQuery) -> ApiRequest + Send + Sync + 'static,
        adapter: impl Fn(Value, &ResourceQuery) -> Result<Page<R>> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name,
            endpoint: Arc::new(endpoint),
            adapter: Arc::new(adapter),
            page_size: DEFAULT_PAGE_SIZE,
            debounce_window: DEFAULT_DEBOUNCE_WINDOW,
            authenticated: true,
            create: None,
            update: None,
            delete: None,
        }
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn debounce(mut self, window: Duration) -> Self {
        self.debounce_window = window;
        self
    }

    /// List reads go out without a bearer token. Writes are always
    /// authenticated.
    pub fn public(mut self) -> Self {
        self.authenticated = false;
        self
    }

    pub fn on_create(mut self, build: impl Fn(Value) -> ApiRequest + Send + Sync + 'static) -> Self {
        self.create = Some(Arc::new(build));
        self
    }

    pub fn on_update(
        mut self,
        build: impl Fn(&str, Value) -> ApiRequest + Send + Sync + 'static,
    ) -> Self {
        self.update = Some(Arc::new(build));
        self
    }

    pub fn on_delete(mut self, build: impl Fn(&str) -> ApiRequest + Send + Sync + 'static) -> Self {
        self.delete = Some(Arc::new(build));
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn debounce_window(&self) -> Duration {
        self.debounce_window
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// The request the controller would issue for `query`.
    pub fn request_for(&self, query: &ResourceQuery) -> ApiRequest {
        (self.endpoint)(query)
    }

    /// Normalize a raw list response for `query`.
    pub fn adapt(&self, body: Value, query: &ResourceQuery) -> Result<Page<R>> {
        (self.adapter)(body, query)
    }

    pub fn new_query(&self) -> ResourceQuery {
        ResourceQuery::new(self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query_at(page: u32) -> ResourceQuery {
        let mut query = ResourceQuery::new(10);
        query.set_page(page);
        query
    }

    #[test]
    fn test_slice_cuts_requested_page() {
        let all: Vec<u32> = (1..=25).collect();
        let page = Page::slice(all.clone(), &query_at(3));
        assert_eq!(page.items, vec![21, 22, 23, 24, 25]);
        assert_eq!(page.total_pages, 3);

        let beyond = Page::slice(all, &query_at(9));
        assert!(beyond.items.is_empty());
        assert_eq!(beyond.total_pages, 3);
    }

    #[test]
    fn test_slice_far_past_the_end_is_empty() {
        let all: Vec<u32> = (1..=25).collect();
        let page = Page::slice(all, &query_at(u32::MAX));
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_slice_of_nothing_has_one_page() {
        let page = Page::<u32>::slice(Vec::new(), &query_at(1));
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_open_ended_offers_next_page_when_full() {
        let full = Page::open_ended((0..10).collect::<Vec<u32>>(), &query_at(2));
        assert_eq!(full.total_pages, 3);

        let partial = Page::open_ended(vec![1u32, 2], &query_at(2));
        assert_eq!(partial.total_pages, 2);
    }

    #[test]
    fn test_reported_count_wins() {
        let page = Page::reported_or_open_ended(vec![1u32], Some(7), &query_at(1));
        assert_eq!(page.total_pages, 7);
        let zero = Page::reported_or_open_ended(vec![1u32], Some(0), &query_at(1));
        assert_eq!(zero.total_pages, 1);
    }
}

//! Generic paginated, filterable list controller.
//!
//! One controller backs one list screen. It owns the [`ResourceQuery`], the
//! items of the current page and the loading/error flags, and is the only
//! thing that talks to the collection's endpoints.
//!
//! Ordering rules:
//!
//! - Every fetch takes a ticket and snapshots the query it was issued for. A
//!   response is applied only when the query is still the same and no newer
//!   ticket has been applied, so slow responses never overwrite newer state.
//! - Free-text edits share one debounce generation. Each edit (and each
//!   immediate fetch) bumps it, so only the last edit of a burst fetches.
//! - A successful delete removes the item from `data` at once and discards
//!   every fetch issued before it, then refetches.

mod config;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;

use crate::api::{success_message, ApiClient, ApiRequest};
use crate::error::{ApiError, Result};
use crate::query::{FilterValue, ResourceQuery};
use crate::resources::{Draft, Resource};
use crate::timer;

pub use config::{
    ControllerConfig, CreateBuilder, DeleteBuilder, EndpointBuilder, Page, ResponseAdapter,
    UpdateBuilder, DEFAULT_DEBOUNCE_WINDOW, DEFAULT_PAGE_SIZE,
};

/// A normalized page together with the query it was fetched for.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceQueryResult<R> {
    pub items: Vec<R>,
    pub total_pages: u32,
    pub fetched_at_query: ResourceQuery,
}

impl<R> ResourceQueryResult<R> {
    fn new(page: Page<R>, fetched_at_query: ResourceQuery) -> Self {
        Self {
            items: page.items,
            total_pages: page.total_pages,
            fetched_at_query,
        }
    }

    /// Whether this result still describes `query`.
    pub fn is_current_for(&self, query: &ResourceQuery) -> bool {
        &self.fetched_at_query == query
    }
}

/// What a view renders.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<R> {
    pub data: Vec<R>,
    pub loading: bool,
    pub error: Option<ApiError>,
    pub page: u32,
    pub total_pages: u32,
    pub query: ResourceQuery,
}

impl<R> ListState<R> {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// How a fetch ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The response replaced `data`
    Applied,
    /// The response failed and `error` was set
    Failed,
    /// The response was discarded because a newer query or fetch won
    Stale,
    /// A debounced edit was superseded before its window elapsed
    Superseded,
    /// Nothing changed, so no request was sent
    Unchanged,
}

/// Proof that the user confirmed a destructive action.
///
/// Views build one only after their confirmation dialog returns yes;
/// [`ResourceListController::remove`] cannot be called without it.
#[derive(Debug, Clone, Copy)]
pub struct Confirmation(());

impl Confirmation {
    pub fn confirmed() -> Self {
        Confirmation(())
    }
}

struct State<R> {
    query: ResourceQuery,
    data: Vec<R>,
    total_pages: u32,
    error: Option<ApiError>,
    in_flight: usize,
    issued: u64,
    applied: u64,
    debounce: u64,
}

struct Inner<R> {
    client: ApiClient,
    config: ControllerConfig<R>,
    state: Mutex<State<R>>,
    changes: watch::Sender<u64>,
}

/// Controller for one list screen. Clones share state.
pub struct ResourceListController<R> {
    inner: Arc<Inner<R>>,
}

impl<R> Clone for ResourceListController<R> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<R: Resource> ResourceListController<R> {
    /// Create an idle controller on page 1. Nothing is fetched until the
    /// view calls [`refresh`](Self::refresh).
    pub fn new(client: ApiClient, config: ControllerConfig<R>) -> Self {
        let state = State {
            query: config.new_query(),
            data: Vec::new(),
            total_pages: 1,
            error: None,
            in_flight: 0,
            issued: 0,
            applied: 0,
            debounce: 0,
        };
        let (changes, _) = watch::channel(0);

        Self {
            inner: Arc::new(Inner {
                client,
                config,
                state: Mutex::new(state),
                changes,
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        self.inner.config.name
    }

    pub fn client(&self) -> &ApiClient {
        &self.inner.client
    }

    pub fn snapshot(&self) -> ListState<R> {
        let state = self.lock();
        ListState {
            data: state.data.clone(),
            loading: state.in_flight > 0,
            error: state.error.clone(),
            page: state.query.page(),
            total_pages: state.total_pages,
            query: state.query.clone(),
        }
    }

    pub fn query(&self) -> ResourceQuery {
        self.lock().query.clone()
    }

    /// Receiver that changes whenever the list state does.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.inner.changes.subscribe()
    }

    /// Edit the query without fetching, e.g. to apply several criteria from
    /// command-line flags before a single [`refresh`](Self::refresh).
    pub fn stage(&self, edit: impl FnOnce(&mut ResourceQuery)) {
        self.mutate(|state| edit(&mut state.query));
    }

    /// Set a discrete filter (dropdown, checkbox) and fetch page 1 right away.
    pub async fn set_filter(&self, name: &str, value: FilterValue) -> FetchOutcome {
        if !self.mutate(|state| state.query.set_filter(name, value)) {
            return FetchOutcome::Unchanged;
        }
        self.fetch_page().await
    }

    /// Set a free-text filter; the fetch waits out the debounce window.
    pub async fn set_text_filter(&self, name: &str, text: impl Into<String>) -> FetchOutcome {
        let value = FilterValue::Text(text.into());
        self.debounced(move |query| {
            query.set_filter(name, value);
        })
        .await
    }

    /// Set the search box text; the fetch waits out the debounce window.
    pub async fn set_search_text(&self, text: impl Into<String>) -> FetchOutcome {
        let text = text.into();
        self.debounced(move |query| query.set_search_text(text)).await
    }

    /// Move to `page`, keeping filters, and fetch right away.
    pub async fn set_page(&self, page: u32) -> FetchOutcome {
        self.mutate(|state| state.query.set_page(page));
        self.fetch_page().await
    }

    /// Refetch the current query.
    pub async fn refresh(&self) -> FetchOutcome {
        self.fetch_page().await
    }

    /// Validate and submit `draft` to the create endpoint, then refresh.
    /// Returns the server's message for the notification.
    pub async fn create<D: Draft>(&self, draft: &D) -> Result<String> {
        let build = self
            .inner
            .config
            .create
            .clone()
            .ok_or(ApiError::Unsupported("Creating"))?;
        draft.validate()?;
        let request = build(to_body(draft)?);
        self.write(request, "Created successfully.").await
    }

    /// Validate and submit `draft` to the update endpoint for `id`, then
    /// refresh.
    pub async fn update<D: Draft>(&self, id: &str, draft: &D) -> Result<String> {
        let build = self
            .inner
            .config
            .update
            .clone()
            .ok_or(ApiError::Unsupported("Updating"))?;
        draft.validate()?;
        let request = build(id, to_body(draft)?);
        self.write(request, "Updated successfully.").await
    }

    /// Delete `id`. On success the item disappears from `data` immediately,
    /// fetches issued before the delete are discarded, and the page is
    /// refetched.
    pub async fn remove(&self, id: &str, _confirmation: Confirmation) -> Result<String> {
        let build = self
            .inner
            .config
            .delete
            .clone()
            .ok_or(ApiError::Unsupported("Deleting"))?;
        let request = build(id);

        let body = self.inner.client.execute(&request, true).await.map_err(|e| {
            tracing::warn!(resource = self.name(), id, error = %e, "Delete failed");
            e
        })?;

        self.mutate(|state| {
            state.data.retain(|item| item.id() != id);
            state.applied = state.issued;
        });
        tracing::info!(resource = self.name(), id, "Deleted");

        self.fetch_page().await;
        Ok(success_message(&body).unwrap_or_else(|| "Deleted successfully.".to_string()))
    }

    async fn write(&self, request: ApiRequest, fallback: &str) -> Result<String> {
        let body = self.inner.client.execute(&request, true).await.map_err(|e| {
            tracing::warn!(resource = self.name(), path = %request.path, error = %e, "Write failed");
            e
        })?;
        tracing::info!(resource = self.name(), path = %request.path, "Write succeeded");

        self.fetch_page().await;
        Ok(success_message(&body).unwrap_or_else(|| fallback.to_string()))
    }

    async fn debounced(&self, edit: impl FnOnce(&mut ResourceQuery)) -> FetchOutcome {
        let generation = self.mutate(|state| {
            edit(&mut state.query);
            state.debounce += 1;
            state.debounce
        });

        timer::sleep(self.inner.config.debounce_window).await;

        if self.lock().debounce != generation {
            return FetchOutcome::Superseded;
        }
        self.fetch_page().await
    }

    async fn fetch_page(&self) -> FetchOutcome {
        let (ticket, query) = self.mutate(|state| {
            state.issued += 1;
            state.in_flight += 1;
            // Whatever was pending is covered by this fetch.
            state.debounce += 1;
            (state.issued, state.query.clone())
        });

        let request = self.inner.config.request_for(&query);
        tracing::debug!(resource = self.name(), page = query.page(), ticket, "Fetching page");

        let result = self
            .inner
            .client
            .execute(&request, self.inner.config.authenticated)
            .await
            .and_then(|body| self.inner.config.adapt(body, &query))
            .map(|page| ResourceQueryResult::new(page, query.clone()));

        self.mutate(|state| {
            state.in_flight = state.in_flight.saturating_sub(1);

            if ticket <= state.applied || state.query != query {
                tracing::debug!(resource = self.name(), ticket, "Discarding stale response");
                return FetchOutcome::Stale;
            }

            match result {
                Ok(result) => {
                    state.applied = ticket;
                    state.data = result.items;
                    state.total_pages = result.total_pages;
                    state.error = None;
                    FetchOutcome::Applied
                }
                Err(e) => {
                    tracing::warn!(resource = self.name(), error = %e, "Fetch failed");
                    state.error = Some(e);
                    FetchOutcome::Failed
                }
            }
        })
    }

    fn lock(&self) -> MutexGuard<'_, State<R>> {
        self.inner
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Mutate state and notify subscribers. The lock is released before the
    /// notification goes out.
    fn mutate<T>(&self, f: impl FnOnce(&mut State<R>) -> T) -> T {
        let out = {
            let mut state = self.lock();
            f(&mut state)
        };
        self.inner.changes.send_modify(|version| *version = version.wrapping_add(1));
        out
    }
}

fn to_body<D: Draft>(draft: &D) -> Result<serde_json::Value> {
    serde_json::to_value(draft).map_err(|e| ApiError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_state_navigation_flags() {
        let state = ListState::<String> {
            data: Vec::new(),
            loading: false,
            error: None,
            page: 1,
            total_pages: 3,
            query: ResourceQuery::new(10),
        };
        assert!(state.is_empty());
        assert!(!state.has_previous());
        assert!(state.has_next());

        let last = ListState { page: 3, ..state };
        assert!(last.has_previous());
        assert!(!last.has_next());
    }

    #[test]
    fn test_result_currency() {
        let mut query = ResourceQuery::new(10);
        let result = ResourceQueryResult::new(Page::new(vec![1u8], 1), query.clone());
        assert!(result.is_current_for(&query));
        query.set_page(2);
        assert!(!result.is_current_for(&query));
    }
}

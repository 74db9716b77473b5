//! Core of the City Insights admin console.
//!
//! Two pieces carry all of the shared state management:
//!
//! - [`SessionContext`] holds the bearer token and the role/name decoded from
//!   it, persists the token through a [`CredentialStore`], and broadcasts
//!   changes to every consumer.
//! - [`ResourceListController`] drives one paginated, filterable list screen
//!   against one REST collection with last-request-wins ordering, a single
//!   debounce timer for free-text input, and refresh after every write.
//!
//! Everything resource-specific (endpoints, filters, response shapes,
//! validation) lives in [`resources`].
//!
//! # Example
//!
//! ```rust,ignore
//! use admin_core::{ApiClient, ClientConfig, MemoryStore, SessionContext};
//! use admin_core::resources::category;
//!
//! let config = ClientConfig::from_env()?;
//! let session = SessionContext::new(Arc::new(MemoryStore::default()));
//! session.initialize();
//!
//! let client = ApiClient::from_config(&config, session.clone());
//! client.sign_in("admin@example.com", "secret").await?;
//!
//! let categories = ResourceListController::new(client, category::list_config());
//! categories.refresh().await;
//! println!("{:?}", categories.snapshot().data);
//! ```

pub mod access;
pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod query;
pub mod resources;
pub mod session;
mod timer;

pub use access::Capability;
pub use api::{ApiClient, ApiRequest, HttpTransport, Method, RawResponse, Transport, TransportError};
pub use config::ClientConfig;
pub use controller::{
    Confirmation, ControllerConfig, FetchOutcome, ListState, Page, ResourceListController,
    ResourceQueryResult,
};
pub use error::{ApiError, Result, ValidationError};
pub use query::{FilterValue, ResourceQuery};
pub use resources::{Draft, Resource};
pub use session::{
    Claims, CredentialStore, DecodeError, MemoryStore, SessionContext, SessionState, StoreError,
    StoredCredential,
};

#[cfg(not(target_arch = "wasm32"))]
pub use session::FileStore;

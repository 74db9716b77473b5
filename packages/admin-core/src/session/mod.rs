//! Session context: who is acting, and how that survives a reload.

mod claims;
mod context;
mod store;

pub use claims::{decode_claims, Claims, DecodeError};
pub use context::{SessionContext, SessionState, DEFAULT_SESSION_TTL_DAYS};
pub use store::{CredentialStore, MemoryStore, StoreError, StoredCredential};

#[cfg(not(target_arch = "wasm32"))]
pub use store::FileStore;

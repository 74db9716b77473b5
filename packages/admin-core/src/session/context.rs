//! The session context shared by every screen.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tokio::sync::watch;

use super::claims::{decode_claims, Claims, DecodeError};
use super::store::{CredentialStore, StoredCredential};
use crate::access::Capability;

/// Days a persisted token stays readable across reloads.
pub const DEFAULT_SESSION_TTL_DAYS: i64 = 14;

/// Snapshot of the session.
///
/// Claims only exist alongside the token they were decoded from; there is no
/// way to build a state holding one without the other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    token: Option<String>,
    claims: Option<Claims>,
}

impl SessionState {
    fn authenticated(token: String, claims: Claims) -> Self {
        Self {
            token: Some(token),
            claims: Some(claims),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn claims(&self) -> Option<&Claims> {
        self.claims.as_ref()
    }

    pub fn role(&self) -> Option<&str> {
        self.claims.as_ref().map(Claims::role)
    }

    pub fn display_name(&self) -> Option<&str> {
        self.claims.as_ref().map(Claims::name)
    }

    pub fn is_authenticated(&self) -> bool {
        self.claims.is_some()
    }

    /// Synchronous gate: unresolved claims never grant access.
    pub fn permits(&self, capability: Capability) -> bool {
        capability.permits(self.role())
    }
}

/// Single source of truth for who is acting.
///
/// Cloning is cheap and every clone observes the same state. Mutations
/// (`login`, `logout`, `on_unauthorized`) are published through a watch
/// channel, so a subscriber sees the change before its next render.
#[derive(Clone)]
pub struct SessionContext {
    state: Arc<watch::Sender<SessionState>>,
    store: Arc<dyn CredentialStore>,
    ttl: Duration,
}

impl SessionContext {
    /// Create an anonymous session backed by `store`. Call
    /// [`initialize`](Self::initialize) to hydrate from a persisted token.
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        let (state, _) = watch::channel(SessionState::default());
        Self {
            state: Arc::new(state),
            store,
            ttl: Duration::days(DEFAULT_SESSION_TTL_DAYS),
        }
    }

    /// Override how long a token persists after login.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Hydrate from the credential store. Returns whether a usable token was
    /// found. Store errors, expired credentials and undecodable tokens all
    /// leave the session anonymous.
    pub fn initialize(&self) -> bool {
        let stored = match self.store.load() {
            Ok(stored) => stored,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read persisted credential");
                None
            }
        };

        let Some(credential) = stored else {
            self.state.send_replace(SessionState::default());
            return false;
        };

        let now = Utc::now();
        if credential.is_expired(now) {
            tracing::info!(expired_at = %credential.expires_at, "Persisted credential expired");
            self.clear();
            return false;
        }

        match decode_claims(&credential.token) {
            Ok(claims) if claims.is_expired(now) => {
                tracing::info!("Persisted token is past its exp claim");
                self.clear();
                false
            }
            Ok(claims) => {
                tracing::debug!(role = %claims.role(), "Session restored");
                self.state
                    .send_replace(SessionState::authenticated(credential.token, claims));
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "Persisted token could not be decoded");
                self.clear();
                false
            }
        }
    }

    /// Adopt a token returned by the login endpoint.
    ///
    /// Nothing is persisted or published unless the token decodes.
    pub fn login(&self, token: &str) -> Result<Claims, DecodeError> {
        let token = token.trim();
        let claims = decode_claims(token)?;
        if let Some(expires_at) = claims.expires_at() {
            if claims.is_expired(Utc::now()) {
                return Err(DecodeError::Expired(expires_at));
            }
        }

        if let Err(e) = self.store.save(&StoredCredential::new(token, self.ttl)) {
            tracing::warn!(error = %e, "Failed to persist credential; session lasts until exit");
        }

        tracing::info!(role = %claims.role(), name = %claims.name(), "Logged in");
        self.state
            .send_replace(SessionState::authenticated(token.to_string(), claims.clone()));
        Ok(claims)
    }

    pub fn logout(&self) {
        tracing::info!("Logged out");
        self.clear();
    }

    /// Called when any request comes back 401.
    pub fn on_unauthorized(&self) {
        if self.state.borrow().is_authenticated() {
            tracing::warn!("Server rejected the session token; logging out");
        }
        self.clear();
    }

    fn clear(&self) {
        if let Err(e) = self.store.clear() {
            tracing::warn!(error = %e, "Failed to clear persisted credential");
        }
        self.state.send_replace(SessionState::default());
    }

    pub fn snapshot(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.state.borrow().token.clone()
    }

    pub fn role(&self) -> Option<String> {
        self.state.borrow().role().map(str::to_string)
    }

    pub fn display_name(&self) -> Option<String> {
        self.state.borrow().display_name().map(str::to_string)
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    pub fn permits(&self, capability: Capability) -> bool {
        self.state.borrow().permits(capability)
    }

    /// Receive every future session change.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemoryStore;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;

    fn token(payload: &str) -> String {
        format!("h.{}.s", URL_SAFE_NO_PAD.encode(payload))
    }

    fn session_with(store: Arc<MemoryStore>) -> SessionContext {
        SessionContext::new(store)
    }

    #[test]
    fn test_initialize_without_credential_is_anonymous() {
        let session = session_with(Arc::new(MemoryStore::default()));
        assert!(!session.initialize());
        assert!(!session.is_authenticated());
        assert_eq!(session.role(), None);
    }

    #[test]
    fn test_initialize_restores_persisted_token() {
        let credential =
            StoredCredential::new(token(r#"{"role":"Editor","name":"Eve"}"#), Duration::days(1));
        let session = session_with(Arc::new(MemoryStore::with_credential(credential)));

        assert!(session.initialize());
        assert_eq!(session.role().as_deref(), Some("editor"));
        assert_eq!(session.display_name().as_deref(), Some("Eve"));
    }

    #[test]
    fn test_initialize_discards_undecodable_token() {
        let credential = StoredCredential::new("garbage", Duration::days(1));
        let store = Arc::new(MemoryStore::with_credential(credential));
        let session = session_with(store.clone());

        assert!(!session.initialize());
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_initialize_drops_expired_credential() {
        let credential = StoredCredential::new(token(r#"{"role":"admin","name":"A"}"#), Duration::days(-1));
        let store = Arc::new(MemoryStore::with_credential(credential));
        let session = session_with(store.clone());

        assert!(!session.initialize());
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_login_rejects_token_past_exp() {
        let store = Arc::new(MemoryStore::default());
        let session = session_with(store.clone());

        let result = session.login(&token(r#"{"role":"admin","name":"A","exp":1}"#));
        assert!(matches!(result, Err(DecodeError::Expired(_))));
        assert!(store.load().unwrap().is_none());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_subscribers_see_logout() {
        let session = session_with(Arc::new(MemoryStore::default()));
        session.login(&token(r#"{"role":"admin","name":"A"}"#)).unwrap();

        let mut rx = session.subscribe();
        assert!(rx.borrow_and_update().is_authenticated());

        session.clone().on_unauthorized();
        assert!(rx.has_changed().unwrap());
        assert!(!rx.borrow_and_update().is_authenticated());
    }

    #[test]
    fn test_state_permits_uses_role() {
        let session = session_with(Arc::new(MemoryStore::default()));
        assert!(!session.permits(Capability::ManageUsers));

        session.login(&token(r#"{"role":"ADMIN","name":"Root"}"#)).unwrap();
        assert!(session.permits(Capability::ManageUsers));
        assert!(session.snapshot().permits(Capability::ManageCategories));
    }
}

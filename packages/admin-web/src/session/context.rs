//! Session provider and hook

use std::sync::Arc;

use admin_core::{
    ApiClient, Capability, ClientConfig, CredentialStore, SessionContext, SessionState,
};
use dioxus::prelude::*;

/// Used when the bundle was built without `ADMIN_API_URL`.
const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Session handle shared with every page.
///
/// `state` mirrors the [`SessionContext`] so components re-render when the
/// user logs in or out, including the automatic logout after a 401.
#[derive(Clone)]
pub struct Session {
    pub context: SessionContext,
    pub client: ApiClient,
    pub config: ClientConfig,
    pub state: Signal<SessionState>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.state.read().is_authenticated()
    }

    pub fn permits(&self, capability: Capability) -> bool {
        self.state.read().permits(capability)
    }

    pub fn display_name(&self) -> Option<String> {
        self.state.read().display_name().map(str::to_string)
    }

    pub fn role(&self) -> Option<String> {
        self.state.read().role().map(str::to_string)
    }

    pub fn logout(&self) {
        self.context.logout();
    }
}

fn client_config() -> ClientConfig {
    let config = ClientConfig::new(option_env!("ADMIN_API_URL").unwrap_or(DEFAULT_API_URL));
    match option_env!("ADMIN_PROTECTED_ACCOUNTS") {
        Some(list) => config.with_protected_accounts(list),
        None => config,
    }
}

#[cfg(feature = "web")]
fn credential_store() -> Arc<dyn CredentialStore> {
    Arc::new(super::CookieStore)
}

#[cfg(not(feature = "web"))]
fn credential_store() -> Arc<dyn CredentialStore> {
    Arc::new(admin_core::MemoryStore::default())
}

/// Session provider component that wraps the app
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let session = use_hook(|| {
        let config = client_config();
        let context = SessionContext::new(credential_store()).with_ttl(config.session_ttl());
        context.initialize();

        let client = ApiClient::from_config(&config, context.clone());
        let state = Signal::new(context.snapshot());

        Session {
            context,
            client,
            config,
            state,
        }
    });

    use_context_provider(|| session.clone());

    // Mirror every session change into the signal
    use_hook(|| {
        let mut changes = session.context.subscribe();
        let mut state = session.state;
        spawn(async move {
            while changes.changed().await.is_ok() {
                let next = changes.borrow_and_update().clone();
                state.set(next);
            }
        });
    });

    children
}

/// Hook to access the session
pub fn use_session() -> Session {
    use_context::<Session>()
}

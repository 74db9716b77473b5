//! Test harness wiring a session, a scripted transport and a client.

#![allow(dead_code)]

use std::sync::Arc;

use admin_core::{
    ApiClient, ControllerConfig, MemoryStore, Resource, ResourceListController, SessionContext,
};

use super::{token_for, MockTransport};

pub struct TestHarness {
    pub transport: MockTransport,
    pub store: Arc<MemoryStore>,
    pub session: SessionContext,
    pub client: ApiClient,
}

impl TestHarness {
    /// Anonymous session over `transport`.
    pub fn new(transport: MockTransport) -> Self {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let store = Arc::new(MemoryStore::default());
        let session = SessionContext::new(store.clone());
        let client = ApiClient::new(Arc::new(transport.clone()), session.clone());

        Self {
            transport,
            store,
            session,
            client,
        }
    }

    /// Session already logged in as `role`.
    pub fn signed_in(transport: MockTransport, role: &str, name: &str) -> Self {
        let harness = Self::new(transport);
        harness
            .session
            .login(&token_for(role, name))
            .expect("Failed to log in test session");
        harness
    }

    pub fn controller<R: Resource>(&self, config: ControllerConfig<R>) -> ResourceListController<R> {
        ResourceListController::new(self.client.clone(), config)
    }
}

//! Scripted transport that records every call.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use admin_core::{ApiRequest, Method, RawResponse, Transport, TransportError};
use async_trait::async_trait;
use serde_json::Value;
use tokio::time::Instant;

#[derive(Debug, Clone)]
struct Scripted {
    status: u16,
    body: String,
    delay: Duration,
    /// Fail before any response, like a refused connection
    error: Option<String>,
}

/// A request as the transport saw it.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub request: ApiRequest,
    pub bearer: Option<String>,
    pub at: Instant,
}

/// Responses are queued per `METHOD path`. Each call takes the next one; the
/// last response of a queue is repeated once the queue runs dry. Unknown
/// routes answer 404.
#[derive(Clone, Default)]
pub struct MockTransport {
    routes: Arc<Mutex<HashMap<String, VecDeque<Scripted>>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

fn route_key(method: Method, path: &str) -> String {
    format!("{:?} {}", method, path)
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(self, method: Method, path: &str, scripted: Scripted) -> Self {
        self.routes
            .lock()
            .unwrap()
            .entry(route_key(method, path))
            .or_default()
            .push_back(scripted);
        self
    }

    /// Queue a 200 JSON response.
    pub fn with_json(self, method: Method, path: &str, body: Value) -> Self {
        self.with_response(method, path, 200, body, Duration::ZERO)
    }

    /// Queue a 200 JSON response that arrives after `delay`.
    pub fn with_delayed_json(self, method: Method, path: &str, delay: Duration, body: Value) -> Self {
        self.with_response(method, path, 200, body, delay)
    }

    /// Queue a JSON response with any status.
    pub fn with_status(self, method: Method, path: &str, status: u16, body: Value) -> Self {
        self.with_response(method, path, status, body, Duration::ZERO)
    }

    pub fn with_response(
        self,
        method: Method,
        path: &str,
        status: u16,
        body: Value,
        delay: Duration,
    ) -> Self {
        self.push(
            method,
            path,
            Scripted {
                status,
                body: body.to_string(),
                delay,
                error: None,
            },
        )
    }

    /// Queue a failure where no response arrives at all.
    pub fn with_transport_error(self, method: Method, path: &str, message: &str) -> Self {
        self.push(
            method,
            path,
            Scripted {
                status: 0,
                body: String::new(),
                delay: Duration::ZERO,
                error: Some(message.to_string()),
            },
        )
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Calls made to `path`, in order
    pub fn calls_to(&self, method: Method, path: &str) -> Vec<RecordedCall> {
        self.calls()
            .into_iter()
            .filter(|call| call.request.method == method && call.request.path == path)
            .collect()
    }

    pub fn call_count(&self, method: Method, path: &str) -> usize {
        self.calls_to(method, path).len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(
        &self,
        request: &ApiRequest,
        bearer: Option<&str>,
    ) -> Result<RawResponse, TransportError> {
        self.calls.lock().unwrap().push(RecordedCall {
            request: request.clone(),
            bearer: bearer.map(str::to_string),
            at: Instant::now(),
        });

        let scripted = {
            let mut routes = self.routes.lock().unwrap();
            match routes.get_mut(&route_key(request.method, &request.path)) {
                Some(queue) if queue.len() > 1 => queue.pop_front(),
                Some(queue) => queue.front().cloned(),
                None => None,
            }
        };

        let Some(scripted) = scripted else {
            return Ok(RawResponse::new(404, r#"{"message":"Not Found"}"#));
        };

        if !scripted.delay.is_zero() {
            tokio::time::sleep(scripted.delay).await;
        }
        if let Some(message) = scripted.error {
            return Err(TransportError(message));
        }
        Ok(RawResponse::new(scripted.status, scripted.body))
    }
}

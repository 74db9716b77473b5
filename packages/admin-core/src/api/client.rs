//! API client bound to a session.

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::transport::{ApiRequest, HttpTransport, RawResponse, Transport};
use crate::config::ClientConfig;
use crate::error::{require, ApiError, Result, GENERIC_FAILURE_MESSAGE};
use crate::session::{Claims, SessionContext};
use crate::timer;

/// Plain-text error bodies longer than this are replaced by the fallback.
const MAX_TEXT_MESSAGE_LEN: usize = 200;

/// Client for the admin REST API.
///
/// Attaches the session's bearer token to authenticated calls, bounds every
/// call by a timeout, and logs the session out whenever the server answers
/// 401.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    session: SessionContext,
    timeout: Duration,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn Transport>, session: SessionContext) -> Self {
        Self {
            transport,
            session,
            timeout: crate::config::DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Create a reqwest-backed client from configuration.
    pub fn from_config(config: &ClientConfig, session: SessionContext) -> Self {
        Self::new(
            Arc::new(HttpTransport::new(config.api_base_url.clone())),
            session,
        )
        .with_timeout(config.request_timeout)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    /// Send a request and return its JSON body (`Null` for an empty body).
    pub async fn execute(&self, request: &ApiRequest, authenticated: bool) -> Result<Value> {
        let token = if authenticated {
            self.session.token()
        } else {
            None
        };

        tracing::debug!(method = ?request.method, path = %request.path, authenticated, "Sending request");

        let response = match timer::timeout(
            self.timeout,
            self.transport.send(request, token.as_deref()),
        )
        .await
        {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => {
                tracing::warn!(path = %request.path, error = %e, "Request failed before a response");
                return Err(ApiError::network(e.to_string()));
            }
            Err(_) => {
                tracing::warn!(path = %request.path, timeout_secs = self.timeout.as_secs(), "Request timed out");
                return Err(ApiError::network(format!(
                    "Request timed out after {}s",
                    self.timeout.as_secs()
                )));
            }
        };

        if response.status == 401 {
            self.session.on_unauthorized();
        }

        if !response.is_success() {
            let message = error_message(&response);
            tracing::warn!(path = %request.path, status = response.status, %message, "API returned an error");
            return Err(ApiError::Http {
                status: response.status,
                message,
            });
        }

        parse_body(&response.body)
    }

    /// Send a request and deserialize its body.
    pub async fn fetch_json<T: DeserializeOwned>(
        &self,
        request: &ApiRequest,
        authenticated: bool,
    ) -> Result<T> {
        let body = self.execute(request, authenticated).await?;
        serde_json::from_value(body).map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Log in with email and password and adopt the returned token.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Claims> {
        require(email, "Email")?;
        require(password, "Password")?;

        #[derive(Serialize)]
        struct Credentials<'a> {
            email: &'a str,
            password: &'a str,
        }

        let request = ApiRequest::post("/users/login")
            .json_from(&Credentials {
                email: email.trim(),
                password,
            })
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        let body = self.execute(&request, false).await?;
        let token = body
            .get("token")
            .and_then(Value::as_str)
            .ok_or_else(|| ApiError::Parse("login response has no token".to_string()))?;

        Ok(self.session.login(token)?)
    }
}

/// Message from a mutation's success body, if the server sent one.
pub fn success_message(body: &Value) -> Option<String> {
    body.get("message")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

fn error_message(response: &RawResponse) -> String {
    let body = response.body.trim();
    if body.is_empty() {
        return GENERIC_FAILURE_MESSAGE.to_string();
    }

    match serde_json::from_str::<Value>(body) {
        Ok(json) => ["message", "error"]
            .iter()
            .find_map(|key| json.get(*key).and_then(Value::as_str))
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(GENERIC_FAILURE_MESSAGE)
            .to_string(),
        Err(_) if body.len() <= MAX_TEXT_MESSAGE_LEN && !body.starts_with('<') => body.to_string(),
        Err(_) => GENERIC_FAILURE_MESSAGE.to_string(),
    }
}

fn parse_body(body: &str) -> Result<Value> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_message_prefers_message_field() {
        let response = RawResponse::new(400, r#"{"message":"Category exists","error":"dup"}"#);
        assert_eq!(error_message(&response), "Category exists");
    }

    #[test]
    fn test_error_message_falls_back_to_error_field() {
        let response = RawResponse::new(500, r#"{"error":"boom"}"#);
        assert_eq!(error_message(&response), "boom");
    }

    #[test]
    fn test_error_message_generic_fallback() {
        assert_eq!(error_message(&RawResponse::new(500, "")), GENERIC_FAILURE_MESSAGE);
        assert_eq!(error_message(&RawResponse::new(500, "{}")), GENERIC_FAILURE_MESSAGE);
        assert_eq!(
            error_message(&RawResponse::new(502, "<html>Bad gateway</html>")),
            GENERIC_FAILURE_MESSAGE
        );
    }

    #[test]
    fn test_error_message_uses_short_text_body() {
        assert_eq!(error_message(&RawResponse::new(404, "Not Found")), "Not Found");
    }

    #[test]
    fn test_success_message() {
        assert_eq!(
            success_message(&json!({"message": "Category added"})),
            Some("Category added".to_string())
        );
        assert_eq!(success_message(&json!({"ok": true})), None);
        assert_eq!(success_message(&Value::Null), None);
    }

    #[test]
    fn test_parse_body_empty_is_null() {
        assert_eq!(parse_body("  ").unwrap(), Value::Null);
        assert!(matches!(parse_body("nope"), Err(ApiError::Parse(_))));
    }
}

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::session::DEFAULT_SESSION_TTL_DAYS;

/// Requests that take longer than this surface as network errors.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the REST API, without a trailing slash
    pub api_base_url: String,
    pub request_timeout: Duration,
    pub session_ttl_days: i64,
    /// Where the CLI keeps its credential; unused in the browser
    pub session_file: Option<PathBuf>,
    /// Staff accounts that can never be deleted
    pub protected_accounts: Vec<String>,
}

impl ClientConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: normalize_base_url(api_base_url.into()),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            session_ttl_days: DEFAULT_SESSION_TTL_DAYS,
            session_file: None,
            protected_accounts: Vec::new(),
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenvy::dotenv();

        let api_base_url = env::var("ADMIN_API_URL").context("ADMIN_API_URL must be set")?;

        let request_timeout = match env::var("ADMIN_REQUEST_TIMEOUT_SECS") {
            Ok(secs) => Duration::from_secs(
                secs.parse()
                    .context("ADMIN_REQUEST_TIMEOUT_SECS must be a valid number")?,
            ),
            Err(_) => DEFAULT_REQUEST_TIMEOUT,
        };

        let session_ttl_days = env::var("ADMIN_SESSION_TTL_DAYS")
            .unwrap_or_else(|_| DEFAULT_SESSION_TTL_DAYS.to_string())
            .parse()
            .context("ADMIN_SESSION_TTL_DAYS must be a valid number")?;

        let protected_accounts = env::var("ADMIN_PROTECTED_ACCOUNTS")
            .map(|list| parse_list(&list))
            .unwrap_or_default();

        Ok(Self {
            api_base_url: normalize_base_url(api_base_url),
            request_timeout,
            session_ttl_days,
            session_file: env::var("ADMIN_SESSION_FILE").ok().map(PathBuf::from),
            protected_accounts,
        })
    }

    /// Replace the protected accounts with a comma-separated list of emails.
    pub fn with_protected_accounts(mut self, list: &str) -> Self {
        self.protected_accounts = parse_list(list);
        self
    }

    pub fn session_ttl(&self) -> chrono::Duration {
        chrono::Duration::days(self.session_ttl_days)
    }

    pub fn is_protected_account(&self, email: &str) -> bool {
        self.protected_accounts
            .iter()
            .any(|protected| protected.eq_ignore_ascii_case(email.trim()))
    }
}

fn normalize_base_url(url: String) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn parse_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_strips_trailing_slash() {
        let config = ClientConfig::new("https://api.example.com/api/ ");
        assert_eq!(config.api_base_url, "https://api.example.com/api");
        assert_eq!(config.request_timeout, Duration::from_secs(15));
        assert_eq!(config.session_ttl_days, 14);
    }

    #[test]
    fn test_protected_accounts_ignore_case() {
        let config = ClientConfig::new("http://localhost")
            .with_protected_accounts(" root@example.com, ,ops@example.com");
        assert_eq!(config.protected_accounts.len(), 2);
        assert!(config.is_protected_account("ROOT@example.com"));
        assert!(!config.is_protected_account("someone@example.com"));
    }
}

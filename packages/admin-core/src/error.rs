//! Error types for admin API operations.

use thiserror::Error;

use crate::session::DecodeError;

/// Result type for admin API operations.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Fallback shown when a failed response carries no `message`.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong.";

/// Errors surfaced by the API client and the list controllers.
///
/// Fetch failures are stored in controller state rather than bubbling to the
/// view; write operations additionally return them so dialogs can show them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Non-2xx response from the API
    #[error("{message}")]
    Http { status: u16, message: String },

    /// No response reached us (connection failure, timeout)
    #[error("Network error: {message}")]
    Network { message: String },

    /// A bearer token could not be decoded
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Client-side check failed before any request was issued
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// 2xx response whose body did not have the expected shape
    #[error("Unexpected response: {0}")]
    Parse(String),

    /// The resource has no endpoint for this operation
    #[error("{0} is not supported for this resource")]
    Unsupported(&'static str),
}

impl ApiError {
    /// Short machine-readable tag, e.g. for styling a notification.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Http { .. } => "http",
            ApiError::Network { .. } => "network",
            ApiError::Decode(_) => "decode",
            ApiError::Validation(_) => "validation",
            ApiError::Parse(_) => "parse",
            ApiError::Unsupported(_) => "unsupported",
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    pub(crate) fn network(message: impl Into<String>) -> Self {
        ApiError::Network {
            message: message.into(),
        }
    }
}

/// Client-side form checks, raised before submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required.")]
    Required(&'static str),

    #[error("{field} is invalid: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Fail with [`ValidationError::Required`] when `value` is blank.
pub(crate) fn require(value: &str, field: &'static str) -> std::result::Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required(field));
    }
    Ok(())
}

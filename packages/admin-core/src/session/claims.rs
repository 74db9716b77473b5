//! Bearer token claim decoding.
//!
//! Tokens are decoded, never verified: the server re-validates the token on
//! every authenticated call, so the claims only drive display and UI gating.

use base64::engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD};
use base64::Engine;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a token is not usable as a session credential.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("Invalid token format: expected three non-empty segments")]
    Format,

    #[error("Invalid token payload: not base64")]
    Base64,

    #[error("Invalid token payload: {0}")]
    Payload(String),

    #[error("Token is missing the `{0}` claim")]
    MissingClaim(&'static str),

    #[error("Token expired at {0}")]
    Expired(DateTime<Utc>),
}

/// Claims carried in the token payload.
///
/// The role is case-folded on decode so every comparison downstream can be a
/// plain equality check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    role: String,
    name: String,
    expires_at: Option<DateTime<Utc>>,
}

impl Claims {
    /// Lower-cased role, e.g. `"admin"`.
    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Expiry from the `exp` claim, when the issuer set one.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|exp| exp <= now)
    }
}

#[derive(Deserialize)]
struct RawClaims {
    role: Option<String>,
    name: Option<String>,
    exp: Option<i64>,
}

/// Decode the payload segment of a `header.payload.signature` token.
pub fn decode_claims(token: &str) -> Result<Claims, DecodeError> {
    let segments: Vec<&str> = token.trim().split('.').collect();
    if segments.len() != 3 || segments.iter().any(|s| s.is_empty()) {
        return Err(DecodeError::Format);
    }

    let payload = decode_segment(segments[1])?;
    let raw: RawClaims =
        serde_json::from_slice(&payload).map_err(|e| DecodeError::Payload(e.to_string()))?;

    let role = raw
        .role
        .map(|r| r.trim().to_lowercase())
        .filter(|r| !r.is_empty())
        .ok_or(DecodeError::MissingClaim("role"))?;

    let expires_at = match raw.exp {
        Some(exp) => Some(
            Utc.timestamp_opt(exp, 0)
                .single()
                .ok_or_else(|| DecodeError::Payload(format!("exp {} out of range", exp)))?,
        ),
        None => None,
    };

    Ok(Claims {
        role,
        name: raw.name.unwrap_or_default(),
        expires_at,
    })
}

/// JWTs use unpadded base64url, but tokens minted by hand or by older
/// issuers show up padded or with the standard alphabet.
fn decode_segment(segment: &str) -> Result<Vec<u8>, DecodeError> {
    let unpadded = segment.trim_end_matches('=');
    URL_SAFE_NO_PAD
        .decode(unpadded)
        .or_else(|_| STANDARD_NO_PAD.decode(unpadded))
        .map_err(|_| DecodeError::Base64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with(payload: &str) -> String {
        format!(
            "{}.{}.signature",
            URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
            URL_SAFE_NO_PAD.encode(payload)
        )
    }

    #[test]
    fn test_decode_folds_role_case() {
        let claims = decode_claims(&token_with(r#"{"role":"Admin","name":"Alice"}"#)).unwrap();
        assert_eq!(claims.role(), "admin");
        assert_eq!(claims.name(), "Alice");
        assert_eq!(claims.expires_at(), None);
    }

    #[test]
    fn test_decode_rejects_wrong_segment_count() {
        assert_eq!(decode_claims("not-a-valid-token"), Err(DecodeError::Format));
        assert_eq!(decode_claims("a.b"), Err(DecodeError::Format));
        assert_eq!(decode_claims("a..c"), Err(DecodeError::Format));
    }

    #[test]
    fn test_decode_rejects_non_json_payload() {
        let token = format!("h.{}.s", URL_SAFE_NO_PAD.encode("plain text"));
        assert!(matches!(decode_claims(&token), Err(DecodeError::Payload(_))));
    }

    #[test]
    fn test_decode_rejects_bad_base64() {
        assert_eq!(decode_claims("h.@@@.s"), Err(DecodeError::Base64));
    }

    #[test]
    fn test_decode_requires_role() {
        let token = token_with(r#"{"name":"Alice"}"#);
        assert_eq!(decode_claims(&token), Err(DecodeError::MissingClaim("role")));
    }

    #[test]
    fn test_decode_accepts_padded_standard_alphabet() {
        let payload = STANDARD_NO_PAD.encode(r#"{"role":"editor","name":"Bo"}"#);
        let token = format!("h.{}==.s", payload);
        assert_eq!(decode_claims(&token).unwrap().role(), "editor");
    }

    #[test]
    fn test_expiry_from_exp_claim() {
        let claims = decode_claims(&token_with(r#"{"role":"admin","name":"A","exp":1000}"#)).unwrap();
        let exp = Utc.timestamp_opt(1000, 0).unwrap();
        assert_eq!(claims.expires_at(), Some(exp));
        assert!(claims.is_expired(exp));
        assert!(!claims.is_expired(Utc.timestamp_opt(999, 0).unwrap()));
    }
}

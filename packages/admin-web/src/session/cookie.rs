//! `adminToken` cookie persistence

use admin_core::session::DEFAULT_SESSION_TTL_DAYS;
use admin_core::{CredentialStore, StoreError, StoredCredential};
use chrono::Duration;
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

pub const COOKIE_NAME: &str = "adminToken";

const EXPIRED: &str = "Thu, 01 Jan 1970 00:00:00 GMT";

/// Keeps the token in a `SameSite=Strict` cookie scoped to the whole site.
///
/// Cookies do not report their own expiry back to script, so a loaded
/// credential is treated as fresh; the browser has already dropped the
/// cookie once it expired.
#[derive(Debug, Default, Clone, Copy)]
pub struct CookieStore;

impl CookieStore {
    fn document() -> Result<HtmlDocument, StoreError> {
        web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.dyn_into::<HtmlDocument>().ok())
            .ok_or_else(|| StoreError::Unavailable("no HTML document".to_string()))
    }

    fn write(cookie: &str) -> Result<(), StoreError> {
        Self::document()?
            .set_cookie(cookie)
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))
    }
}

impl CredentialStore for CookieStore {
    fn load(&self) -> Result<Option<StoredCredential>, StoreError> {
        let cookies = Self::document()?
            .cookie()
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))?;

        Ok(find_cookie(&cookies, COOKIE_NAME)
            .map(|token| StoredCredential::new(token, Duration::days(DEFAULT_SESSION_TTL_DAYS))))
    }

    fn save(&self, credential: &StoredCredential) -> Result<(), StoreError> {
        let expires = credential.expires_at.format("%a, %d %b %Y %H:%M:%S GMT");
        Self::write(&format!(
            "{}={}; expires={}; path=/; SameSite=Strict",
            COOKIE_NAME, credential.token, expires
        ))
    }

    fn clear(&self) -> Result<(), StoreError> {
        Self::write(&format!("{}=; expires={}; path=/; SameSite=Strict", COOKIE_NAME, EXPIRED))
    }
}

/// Value of `name` in a `document.cookie` string; blank values count as absent.
fn find_cookie(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_cookie() {
        let cookies = "theme=dark; adminToken=a.b.c; other=1";
        assert_eq!(find_cookie(cookies, COOKIE_NAME).as_deref(), Some("a.b.c"));
        assert_eq!(find_cookie("theme=dark", COOKIE_NAME), None);
        assert_eq!(find_cookie("adminToken=", COOKIE_NAME), None);
        assert_eq!(find_cookie("xadminToken=zzz", COOKIE_NAME), None);
    }
}

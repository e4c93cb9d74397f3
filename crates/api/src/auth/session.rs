//! Session cookie configuration and header plumbing.
//!
//! Token construction and verification live in [`awe_core::session`]; this
//! module loads the secret, and reads and writes the `awesession` cookie.

use awe_core::session::{SessionCodec, COOKIE_NAME, DEFAULT_MAX_AGE_SECS, DELETED_COOKIE_VALUE};
use axum::http::header::COOKIE;
use axum::http::HeaderMap;

/// Configuration for signing session cookies.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Server-side key mixed into every token signature.
    pub secret: String,
    /// Cookie and token lifetime in seconds (default: one day).
    pub max_age_secs: i64,
}

impl SessionConfig {
    /// Load session configuration from environment variables.
    ///
    /// | Env Var                | Required | Default |
    /// |------------------------|----------|---------|
    /// | `SESSION_SECRET`       | **yes**  | --      |
    /// | `SESSION_MAX_AGE_SECS` | no       | `86400` |
    ///
    /// # Panics
    ///
    /// Panics if `SESSION_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let secret = std::env::var("SESSION_SECRET")
            .expect("SESSION_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "SESSION_SECRET must not be empty");

        let max_age_secs: i64 = std::env::var("SESSION_MAX_AGE_SECS")
            .unwrap_or_else(|_| DEFAULT_MAX_AGE_SECS.to_string())
            .parse()
            .expect("SESSION_MAX_AGE_SECS must be a valid i64");
        assert!(max_age_secs > 0, "SESSION_MAX_AGE_SECS must be positive");

        Self {
            secret,
            max_age_secs,
        }
    }

    pub fn codec(&self) -> SessionCodec {
        SessionCodec::new(self.secret.clone(), self.max_age_secs)
    }
}

/// `Set-Cookie` value carrying a freshly issued session token.
pub fn session_cookie(token: &str, max_age_secs: i64) -> String {
    format!("{COOKIE_NAME}={token}; Max-Age={max_age_secs}; Path=/; HttpOnly; SameSite=Lax")
}

/// `Set-Cookie` value that overwrites and expires the session cookie.
pub fn cleared_session_cookie() -> String {
    session_cookie(DELETED_COOKIE_VALUE, 0)
}

/// Find a cookie by name across every `Cookie` header on the request.
pub fn read_cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

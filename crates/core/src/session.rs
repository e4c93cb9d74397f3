//! Signed session tokens carried in the `awesession` cookie.
//!
//! A token is `userId-expiresAt-signature`, where `signature` is the lowercase
//! hex HMAC-SHA256 of `userId-userSecret-expiresAt` keyed with the server
//! secret. The user secret is the stored password hash, so changing a
//! password invalidates every outstanding token for that user.
//!
//! This module never touches storage. Callers parse the cookie with
//! [`SessionCodec::parse`], load the user named by [`SessionToken::user_id`],
//! then check the signature with [`SessionCodec::verify`].

use std::fmt;

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Name of the session cookie.
pub const COOKIE_NAME: &str = "awesession";

/// Value written to the cookie on sign-out.
pub const DELETED_COOKIE_VALUE: &str = "-deleted-";

/// Placeholder that replaces the user secret before a user leaves the server.
pub const MASKED_SECRET: &str = "******";

/// Default session lifetime: one day.
pub const DEFAULT_MAX_AGE_SECS: i64 = 86_400;

/// A structurally valid, unexpired token whose signature is not yet checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken {
    pub user_id: String,
    pub expires_at: i64,
    pub signature: String,
}

impl SessionToken {
    /// Parse a raw cookie value, rejecting it if it is malformed or expired
    /// relative to `now` (Unix seconds).
    pub fn parse(raw: &str, now: i64) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }

        let parts: Vec<&str> = raw.split('-').collect();
        let [user_id, expires_at, signature] = parts.as_slice() else {
            return None;
        };

        let expires_at: i64 = expires_at.parse().ok()?;
        if expires_at < now {
            return None;
        }

        Some(Self {
            user_id: (*user_id).to_string(),
            expires_at,
            signature: (*signature).to_string(),
        })
    }

    /// Serialize back into the cookie value format.
    pub fn encode(&self) -> String {
        format!("{}-{}-{}", self.user_id, self.expires_at, self.signature)
    }
}

/// Issues and checks session tokens with a process-wide server secret.
#[derive(Clone)]
pub struct SessionCodec {
    secret: String,
    max_age_secs: i64,
}

impl fmt::Debug for SessionCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionCodec")
            .field("secret", &MASKED_SECRET)
            .field("max_age_secs", &self.max_age_secs)
            .finish()
    }
}

impl SessionCodec {
    pub fn new(secret: impl Into<String>, max_age_secs: i64) -> Self {
        Self {
            secret: secret.into(),
            max_age_secs,
        }
    }

    /// Lifetime of tokens produced by [`SessionCodec::encode`], in seconds.
    pub fn max_age_secs(&self) -> i64 {
        self.max_age_secs
    }

    /// Issue a token valid for the configured lifetime.
    pub fn encode(&self, user_id: &str, user_secret: &str) -> String {
        self.encode_with_ttl(user_id, user_secret, self.max_age_secs)
    }

    /// Issue a token valid for `ttl_secs` from now.
    pub fn encode_with_ttl(&self, user_id: &str, user_secret: &str, ttl_secs: i64) -> String {
        self.encode_at(user_id, user_secret, ttl_secs, now_unix())
    }

    /// Issue a token valid for `ttl_secs` from `now`.
    pub fn encode_at(&self, user_id: &str, user_secret: &str, ttl_secs: i64, now: i64) -> String {
        let expires_at = now.saturating_add(ttl_secs);
        SessionToken {
            user_id: user_id.to_string(),
            expires_at,
            signature: self.sign(user_id, user_secret, expires_at),
        }
        .encode()
    }

    /// Parse a cookie value against the current clock.
    pub fn parse(&self, raw: &str) -> Option<SessionToken> {
        SessionToken::parse(raw, now_unix())
    }

    /// Check the token signature against the stored secret of the user it
    /// names. Comparison runs in constant time.
    pub fn verify(&self, token: &SessionToken, user_secret: &str) -> bool {
        let Ok(supplied) = hex::decode(&token.signature) else {
            return false;
        };
        self.mac(&token.user_id, user_secret, token.expires_at)
            .verify_slice(&supplied)
            .is_ok()
    }

    fn sign(&self, user_id: &str, user_secret: &str, expires_at: i64) -> String {
        hex::encode(
            self.mac(user_id, user_secret, expires_at)
                .finalize()
                .into_bytes(),
        )
    }

    fn mac(&self, user_id: &str, user_secret: &str, expires_at: i64) -> HmacSha256 {
        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .expect("HMAC accepts keys of any length");
        mac.update(format!("{user_id}-{user_secret}-{expires_at}").as_bytes());
        mac
    }
}

fn now_unix() -> i64 {
    chrono::Utc::now().timestamp()
}

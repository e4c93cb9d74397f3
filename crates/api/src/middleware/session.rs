//! Cookie-based session extractor for Axum handlers.

use std::convert::Infallible;

use awe_core::session::{SessionCodec, COOKIE_NAME};
use awe_db::models::user::User;
use awe_db::repositories::UserRepo;
use awe_db::DbPool;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::auth::session::read_cookie;
use crate::state::AppState;

/// The user named by the request's `awesession` cookie, or `None` for an
/// anonymous request.
///
/// Never rejects: a missing, malformed, expired or forged cookie simply
/// yields `None`. The user's password hash is masked.
///
/// ```ignore
/// async fn my_handler(SessionUser(user): SessionUser) -> AppResult<Json<()>> {
///     if let Some(user) = &user {
///         tracing::info!(user_id = %user.id, "handling signed-in request");
///     }
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SessionUser(pub Option<User>);

impl FromRequestParts<AppState> for SessionUser {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(SessionUser(current_user(parts, state).await))
    }
}

/// The signed-in user for a request, read from its session cookie.
pub(crate) async fn current_user(parts: &Parts, state: &AppState) -> Option<User> {
    let raw = read_cookie(&parts.headers, COOKIE_NAME)?;
    decode_session(&state.pool, &state.sessions, raw).await
}

/// Resolve a raw cookie value to the user it authenticates.
///
/// Lookup failures are logged and treated as anonymous.
pub async fn decode_session(pool: &DbPool, codec: &SessionCodec, raw: &str) -> Option<User> {
    let token = codec.parse(raw)?;

    let user = match UserRepo::find_by_id(pool, &token.user_id).await {
        Ok(Some(user)) => user,
        Ok(None) => return None,
        Err(e) => {
            tracing::error!(error = %e, user_id = %token.user_id, "Session user lookup failed");
            return None;
        }
    };

    if !codec.verify(&token, &user.passwd) {
        tracing::warn!(user_id = %token.user_id, "Rejected session cookie with invalid signature");
        return None;
    }

    Some(user.redacted())
}

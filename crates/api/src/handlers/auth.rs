//! Handler for `POST /api/authenticate`.

use awe_core::error::CoreError;
use awe_db::repositories::UserRepo;
use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::auth::password::verify_password;
use crate::auth::session::session_cookie;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for `POST /api/authenticate`.
///
/// `passwd` is the client-side digest, not the plaintext password.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AuthenticateRequest {
    pub email: Option<String>,
    pub passwd: Option<String>,
}

/// POST /api/authenticate
///
/// Check an email + password digest and start a session. Responds with the
/// masked user and a `Set-Cookie` header.
pub async fn authenticate(
    State(state): State<AppState>,
    Json(input): Json<AuthenticateRequest>,
) -> AppResult<Response> {
    let email = input
        .email
        .as_deref()
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .ok_or_else(|| CoreError::invalid_with("email", "Invalid email"))?;
    let passwd = input
        .passwd
        .as_deref()
        .filter(|p| !p.is_empty())
        .ok_or_else(|| CoreError::invalid_with("passwd", "Invalid passwd."))?;

    let user = UserRepo::find_by_email(&state.pool, email)
        .await?
        .ok_or_else(|| CoreError::invalid_with("email", "Email not exist."))?;

    let valid = verify_password(&user.id, passwd, &user.passwd)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !valid {
        return Err(CoreError::invalid_with("passwd", "Invalid password.").into());
    }

    tracing::info!(user_id = %user.id, "User signed in");
    Ok(session_response(&state, user))
}

/// JSON body of the masked user plus a fresh session cookie.
pub(crate) fn session_response(state: &AppState, user: awe_db::models::user::User) -> Response {
    let token = state.sessions.encode(&user.id, &user.passwd);
    let cookie = session_cookie(&token, state.sessions.max_age_secs());
    ([(SET_COOKIE, cookie)], Json(user.redacted())).into_response()
}

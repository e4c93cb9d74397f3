//! Handlers for the `/api/users` resource.

use awe_core::error::CoreError;
use awe_core::paging::Page;
use awe_core::text::gravatar_url;
use awe_core::types::next_id;
use awe_core::validation::{is_password_digest, is_valid_email, require_text_max, MAX_NAME_LEN};
use awe_db::models::user::CreateUser;
use awe_db::repositories::UserRepo;
use axum::extract::{Query, State};
use axum::response::Response;
use axum::Json;
use serde::Deserialize;

use super::auth::session_response;
use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::query::PageParams;
use crate::response::UserPage;
use crate::state::AppState;

/// Request body for `POST /api/users`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub passwd: Option<String>,
}

/// GET /api/users
///
/// Newest accounts first. Password hashes are masked.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<UserPage>> {
    let item_count = UserRepo::count(&state.pool).await?;
    let page = Page::from_query(params.raw(), item_count);
    let users = if item_count == 0 {
        Vec::new()
    } else {
        UserRepo::list_page(&state.pool, page.offset, page.limit).await?
    };

    Ok(Json(UserPage {
        page,
        users: users.into_iter().map(|u| u.redacted()).collect(),
    }))
}

/// POST /api/users
///
/// Register a new (non-admin) account and sign it in.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<Response> {
    let name = require_text_max("name", input.name.as_deref(), MAX_NAME_LEN)?;

    let email = input
        .email
        .as_deref()
        .map(|e| e.trim().to_lowercase())
        .filter(|e| e.chars().count() <= MAX_NAME_LEN && is_valid_email(e))
        .ok_or_else(|| CoreError::invalid("email"))?;

    let passwd = input
        .passwd
        .as_deref()
        .filter(|p| is_password_digest(p))
        .ok_or_else(|| CoreError::invalid("passwd"))?;

    if UserRepo::find_by_email(&state.pool, &email).await?.is_some() {
        return Err(email_in_use().into());
    }

    let id = next_id();
    let hashed = hash_password(&id, passwd)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?;

    let input = CreateUser {
        image: gravatar_url(&email),
        id,
        email,
        passwd: hashed,
        admin: false,
        name: name.to_string(),
    };

    // A concurrent registration can slip past the lookup above.
    let user = match UserRepo::create(&state.pool, &input).await {
        Ok(user) => user,
        Err(sqlx::Error::Database(e)) if e.constraint() == Some("uq_users_email") => {
            return Err(email_in_use().into());
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!(user_id = %user.id, "User registered");
    Ok(session_response(&state, user))
}

fn email_in_use() -> CoreError {
    CoreError::Conflict {
        code: "register:failed",
        field: "email",
        message: "Email is already in use.".to_string(),
    }
}

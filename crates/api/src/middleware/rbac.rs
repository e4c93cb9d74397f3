//! Role-based access control (RBAC) extractors.
//!
//! Each extractor resolves the session cookie like
//! [`SessionUser`](super::session::SessionUser) and rejects requests that do not meet
//! the requirement. Use these in route handlers to enforce authorization at
//! the type level.

use awe_core::error::CoreError;
use awe_db::models::user::User;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::response::Response;

use super::session::current_user;
use crate::error::AppError;
use crate::response::found;
use crate::state::AppState;

/// Requires any signed-in user. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn comment(RequireUser(user): RequireUser) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireUser(pub User);

impl FromRequestParts<AppState> for RequireUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = current_user(parts, state).await;
        user.map(RequireUser)
            .ok_or_else(|| AppError::Core(CoreError::forbidden("Please signin first.")))
    }
}

/// Requires an admin. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(user): RequireAdmin) -> AppResult<Json<()>> {
///     // user is guaranteed to be an admin here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub User);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = current_user(parts, state).await;
        admin_only(user)
            .map(RequireAdmin)
            .ok_or_else(|| AppError::Core(CoreError::forbidden("Admin privilege required.")))
    }
}

/// Requires an admin on a browser page. Anyone else is sent to `/signin`.
pub struct AdminPage(pub User);

impl FromRequestParts<AppState> for AdminPage {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = current_user(parts, state).await;
        admin_only(user).map(AdminPage).ok_or_else(|| found("/signin"))
    }
}

fn admin_only(user: Option<User>) -> Option<User> {
    user.filter(|u| u.admin)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(admin: bool) -> User {
        User {
            id: "u1".to_string(),
            email: "u1@example.com".to_string(),
            passwd: "******".to_string(),
            admin,
            name: "U1".to_string(),
            image: "about:blank".to_string(),
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn only_admins_pass() {
        assert!(admin_only(Some(user(true))).is_some());
        assert!(admin_only(Some(user(false))).is_none());
        assert!(admin_only(None).is_none());
    }
}

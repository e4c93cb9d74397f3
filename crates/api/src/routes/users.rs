//! Route definitions for the `/api/users` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// ```text
/// GET  /api/users   -> list (?page=)
/// POST /api/users   -> register
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/api/users", get(users::list).post(users::register))
}

//! Route definitions for the `/api/comments` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::comments;
use crate::state::AppState;

/// ```text
/// GET  /api/comments               -> list (?page=)
/// POST /api/comments/{id}/delete   -> delete (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/comments", get(comments::list))
        .route("/api/comments/{id}/delete", post(comments::delete))
}

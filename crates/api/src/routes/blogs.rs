//! Route definitions for the `/api/blogs` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{blogs, comments};
use crate::state::AppState;

/// ```text
/// GET  /api/blogs                   -> list (?page=)
/// POST /api/blogs                   -> create (signed in)
/// GET  /api/blogs/{id}              -> get_by_id
/// POST /api/blogs/{id}              -> update (admin)
/// POST /api/blogs/{id}/delete       -> delete (admin)
/// POST /api/blogs/{id}/comments     -> comments::create (signed in)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/blogs", get(blogs::list).post(blogs::create))
        .route("/api/blogs/{id}", get(blogs::get_by_id).post(blogs::update))
        .route("/api/blogs/{id}/delete", post(blogs::delete))
        .route("/api/blogs/{id}/comments", post(comments::create))
}

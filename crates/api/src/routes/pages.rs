//! Route definitions for the public HTML pages.

use axum::routing::get;
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// ```text
/// GET /             -> index (?page=)
/// GET /blog/{id}    -> blog
/// GET /register     -> register
/// GET /signin       -> signin
/// GET /signout      -> signout
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::index))
        .route("/blog/{id}", get(pages::blog))
        .route("/register", get(pages::register))
        .route("/signin", get(pages::signin))
        .route("/signout", get(pages::signout))
}

//! Route definitions for signing in.

use axum::routing::post;
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// ```text
/// POST /api/authenticate   -> authenticate
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/api/authenticate", post(auth::authenticate))
}

//! Route definitions for the admin console.

use axum::routing::get;
use axum::Router;

use crate::handlers::manage;
use crate::state::AppState;

/// Every page redirects non-admins to `/signin`.
///
/// ```text
/// GET /manage/               -> root (302 to /manage/comments)
/// GET /manage/comments       -> comments (?page=)
/// GET /manage/blogs          -> blogs (?page=)
/// GET /manage/blogs/create   -> create_blog
/// GET /manage/blogs/edit     -> edit_blog (?id=)
/// GET /manage/users          -> users (?page=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/manage/", get(manage::root))
        .route("/manage/comments", get(manage::comments))
        .route("/manage/blogs", get(manage::blogs))
        .route("/manage/blogs/create", get(manage::create_blog))
        .route("/manage/blogs/edit", get(manage::edit_blog))
        .route("/manage/users", get(manage::users))
}

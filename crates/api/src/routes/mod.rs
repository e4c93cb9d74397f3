pub mod auth;
pub mod blogs;
pub mod comments;
pub mod health;
pub mod manage;
pub mod pages;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the full route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                                 front page (?page=)
/// /blog/{id}                        post with comments
/// /register, /signin, /signout      account pages
///
/// /manage/...                       admin console pages (admin only)
///
/// /api/authenticate                 sign in (public)
/// /api/users                        list, register
/// /api/blogs                        list, create (signed in)
/// /api/blogs/{id}                   get, update (admin)
/// /api/blogs/{id}/delete            delete (admin)
/// /api/blogs/{id}/comments          post comment (signed in)
/// /api/comments                     list
/// /api/comments/{id}/delete         delete (admin)
/// ```
///
/// `/health` is mounted separately by the app router.
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(pages::router())
        .merge(manage::router())
        .merge(auth::router())
        .merge(users::router())
        .merge(blogs::router())
        .merge(comments::router())
}

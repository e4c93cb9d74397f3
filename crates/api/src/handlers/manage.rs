//! Admin console pages under `/manage`.
//!
//! These pages only carry the page index; the listings themselves are fetched
//! by the browser from the JSON API.

use awe_core::paging::page_index;
use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Response};
use serde_json::json;

use crate::error::AppResult;
use crate::middleware::rbac::AdminPage;
use crate::query::{EditParams, PageParams};
use crate::response::found;
use crate::state::AppState;
use crate::views::{self, View};

/// GET /manage/
pub async fn root(AdminPage(_): AdminPage) -> Response {
    found("/manage/comments")
}

/// GET /manage/comments
pub async fn comments(
    State(state): State<AppState>,
    AdminPage(user): AdminPage,
    Query(params): Query<PageParams>,
) -> AppResult<Html<String>> {
    render_listing(&state, &user, views::MANAGE_COMMENTS, &params)
}

/// GET /manage/blogs
pub async fn blogs(
    State(state): State<AppState>,
    AdminPage(user): AdminPage,
    Query(params): Query<PageParams>,
) -> AppResult<Html<String>> {
    render_listing(&state, &user, views::MANAGE_BLOGS, &params)
}

/// GET /manage/users
pub async fn users(
    State(state): State<AppState>,
    AdminPage(user): AdminPage,
    Query(params): Query<PageParams>,
) -> AppResult<Html<String>> {
    render_listing(&state, &user, views::MANAGE_USERS, &params)
}

/// GET /manage/blogs/create
pub async fn create_blog(
    State(state): State<AppState>,
    AdminPage(user): AdminPage,
) -> AppResult<Html<String>> {
    let view = View::new(
        views::MANAGE_BLOG_EDIT,
        json!({ "title": "New post", "id": "", "action": "/api/blogs" }),
    )
    .with_user(Some(&user));
    state.templates.render(&view)
}

/// GET /manage/blogs/edit?id=
///
/// Without an id there is nothing to edit, so the browser goes back to the
/// post list.
pub async fn edit_blog(
    State(state): State<AppState>,
    AdminPage(user): AdminPage,
    Query(params): Query<EditParams>,
) -> AppResult<Response> {
    let Some(id) = params.id.as_deref().map(str::trim).filter(|id| !id.is_empty()) else {
        return Ok(found("/manage/blogs"));
    };
    let view = View::new(
        views::MANAGE_BLOG_EDIT,
        json!({ "title": "Edit post", "id": id, "action": format!("/api/blogs/{id}") }),
    )
    .with_user(Some(&user));
    Ok(state.templates.render(&view)?.into_response())
}

fn render_listing(
    state: &AppState,
    user: &awe_db::models::user::User,
    template: &'static str,
    params: &PageParams,
) -> AppResult<Html<String>> {
    let view = View::new(template, json!({ "page_index": page_index(params.raw()) }))
        .with_user(Some(user));
    state.templates.render(&view)
}

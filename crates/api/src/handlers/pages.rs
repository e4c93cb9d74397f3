//! Public HTML pages: the front page, post pages, and the auth forms.

use awe_core::error::CoreError;
use awe_core::paging::Page;
use awe_core::text::{markdown_to_html, text_to_html};
use awe_db::repositories::{BlogRepo, CommentRepo};
use axum::extract::{Path, Query, State};
use axum::http::header::REFERER;
use axum::http::HeaderMap;
use axum::response::{Html, Response};
use serde_json::json;

use crate::auth::session::cleared_session_cookie;
use crate::error::{AppError, AppResult};
use crate::middleware::session::SessionUser;
use crate::query::PageParams;
use crate::response::found_with_cookie;
use crate::state::AppState;
use crate::views::{self, View};

/// GET /
///
/// Newest posts first, ten per page.
pub async fn index(
    State(state): State<AppState>,
    SessionUser(user): SessionUser,
    Query(params): Query<PageParams>,
) -> AppResult<Html<String>> {
    let item_count = BlogRepo::count(&state.pool).await?;
    let page = Page::from_query(params.raw(), item_count);
    let blogs = if item_count == 0 {
        Vec::new()
    } else {
        BlogRepo::list_page(&state.pool, page.offset, page.limit).await?
    };

    let view = View::new(views::BLOGS, json!({ "page": page, "blogs": blogs }))
        .with_user(user.as_ref());
    state.templates.render(&view)
}

/// GET /blog/{id}
pub async fn blog(
    State(state): State<AppState>,
    SessionUser(user): SessionUser,
    Path(id): Path<String>,
) -> AppResult<Html<String>> {
    let blog = BlogRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Blog",
            id: id.clone(),
        }))?;
    let comments = CommentRepo::list_by_blog(&state.pool, &id).await?;

    let comments: Vec<_> = comments
        .into_iter()
        .map(|c| {
            let html_content = text_to_html(&c.content);
            let mut value = json!(c);
            value["html_content"] = json!(html_content);
            value
        })
        .collect();

    let mut blog_value = json!(blog);
    blog_value["html_content"] = json!(markdown_to_html(&blog.content));

    let view = View::new(
        views::BLOG,
        json!({ "title": blog.name, "blog": blog_value, "comments": comments }),
    )
    .with_user(user.as_ref());
    state.templates.render(&view)
}

/// GET /register
pub async fn register(
    State(state): State<AppState>,
    SessionUser(user): SessionUser,
) -> AppResult<Html<String>> {
    let view = View::new(views::REGISTER, json!({ "title": "Register" })).with_user(user.as_ref());
    state.templates.render(&view)
}

/// GET /signin
pub async fn signin(
    State(state): State<AppState>,
    SessionUser(user): SessionUser,
) -> AppResult<Html<String>> {
    let view = View::new(views::SIGNIN, json!({ "title": "Sign in" })).with_user(user.as_ref());
    state.templates.render(&view)
}

/// GET /signout
///
/// Expires the session cookie and sends the browser back where it came from.
pub async fn signout(headers: HeaderMap) -> Response {
    let location = headers
        .get(REFERER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .unwrap_or("/");
    tracing::info!("User signed out");
    found_with_cookie(location, cleared_session_cookie())
}

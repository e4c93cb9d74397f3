//! Handlers for comments: the admin listing, posting and deletion.

use awe_core::error::CoreError;
use awe_core::paging::Page;
use awe_core::validation::require_text;
use awe_db::models::comment::{Comment, CreateComment};
use awe_db::repositories::{BlogRepo, CommentRepo};
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::rbac::{RequireAdmin, RequireUser};
use crate::query::PageParams;
use crate::response::{CommentPage, DeletedResponse};
use crate::state::AppState;

/// Request body for `POST /api/blogs/{id}/comments`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CommentRequest {
    pub content: Option<String>,
}

/// GET /api/comments
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<CommentPage>> {
    let item_count = CommentRepo::count(&state.pool).await?;
    let page = Page::from_query(params.raw(), item_count);
    let comments = if item_count == 0 {
        Vec::new()
    } else {
        CommentRepo::list_page(&state.pool, page.offset, page.limit).await?
    };
    Ok(Json(CommentPage { page, comments }))
}

/// POST /api/blogs/{id}/comments
pub async fn create(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(blog_id): Path<String>,
    Json(input): Json<CommentRequest>,
) -> AppResult<Json<Comment>> {
    let content = require_text("content", input.content.as_deref())?;

    let blog = BlogRepo::find_by_id(&state.pool, &blog_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Blog",
            id: blog_id,
        })?;

    let comment = CommentRepo::create(
        &state.pool,
        &CreateComment {
            blog_id: blog.id,
            user_id: user.id,
            user_name: user.name,
            user_image: user.image,
            content: content.to_string(),
        },
    )
    .await?;

    tracing::debug!(comment_id = %comment.id, blog_id = %comment.blog_id, "Comment posted");
    Ok(Json(comment))
}

/// POST /api/comments/{id}/delete
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<String>,
) -> AppResult<Json<DeletedResponse>> {
    if !CommentRepo::delete(&state.pool, &id).await? {
        return Err(CoreError::NotFound {
            entity: "Comment",
            id,
        }
        .into());
    }

    tracing::info!(comment_id = %id, admin_id = %admin.id, "Comment deleted");
    Ok(Json(DeletedResponse { id }))
}

//! Handlers for the `/api/blogs` resource.

use awe_core::error::CoreError;
use awe_core::paging::Page;
use awe_core::validation::{require_text, require_text_max, MAX_NAME_LEN, MAX_SUMMARY_LEN};
use awe_db::models::blog::{Blog, CreateBlog, UpdateBlog};
use awe_db::repositories::BlogRepo;
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::rbac::{RequireAdmin, RequireUser};
use crate::query::PageParams;
use crate::response::{BlogPage, DeletedResponse};
use crate::state::AppState;

/// Request body for creating or editing a post.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BlogRequest {
    pub name: Option<String>,
    pub summary: Option<String>,
    pub content: Option<String>,
}

impl BlogRequest {
    /// Trimmed name, summary and content, each required and sized to its column.
    fn validate(&self) -> Result<UpdateBlog, CoreError> {
        Ok(UpdateBlog {
            name: require_text_max("name", self.name.as_deref(), MAX_NAME_LEN)?.to_string(),
            summary: require_text_max("summary", self.summary.as_deref(), MAX_SUMMARY_LEN)?
                .to_string(),
            content: require_text("content", self.content.as_deref())?.to_string(),
        })
    }
}

/// GET /api/blogs
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<BlogPage>> {
    let item_count = BlogRepo::count(&state.pool).await?;
    let page = Page::from_query(params.raw(), item_count);
    let blogs = if item_count == 0 {
        Vec::new()
    } else {
        BlogRepo::list_page(&state.pool, page.offset, page.limit).await?
    };
    Ok(Json(BlogPage { page, blogs }))
}

/// GET /api/blogs/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Blog>> {
    let blog = BlogRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| not_found(&id))?;
    Ok(Json(blog))
}

/// POST /api/blogs
///
/// The post is attributed to the signed-in author.
pub async fn create(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Json(input): Json<BlogRequest>,
) -> AppResult<Json<Blog>> {
    let fields = input.validate()?;
    let blog = BlogRepo::create(
        &state.pool,
        &CreateBlog {
            user_id: user.id,
            user_name: user.name,
            user_image: user.image,
            name: fields.name,
            summary: fields.summary,
            content: fields.content,
        },
    )
    .await?;

    tracing::info!(blog_id = %blog.id, user_id = %blog.user_id, "Blog created");
    Ok(Json(blog))
}

/// POST /api/blogs/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<String>,
    Json(input): Json<BlogRequest>,
) -> AppResult<Json<Blog>> {
    let fields = input.validate()?;
    let blog = BlogRepo::update(&state.pool, &id, &fields)
        .await?
        .ok_or_else(|| not_found(&id))?;

    tracing::info!(blog_id = %blog.id, admin_id = %admin.id, "Blog updated");
    Ok(Json(blog))
}

/// POST /api/blogs/{id}/delete
///
/// Comments on the post are removed with it.
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<String>,
) -> AppResult<Json<DeletedResponse>> {
    if !BlogRepo::delete(&state.pool, &id).await? {
        return Err(not_found(&id).into());
    }

    tracing::info!(blog_id = %id, admin_id = %admin.id, "Blog deleted");
    Ok(Json(DeletedResponse { id }))
}

fn not_found(id: &str) -> CoreError {
    CoreError::NotFound {
        entity: "Blog",
        id: id.to_string(),
    }
}

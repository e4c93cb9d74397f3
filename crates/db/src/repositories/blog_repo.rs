//! Repository for the `blogs` table.

use awe_core::types::next_id;
use sqlx::PgPool;

use crate::models::blog::{Blog, CreateBlog, UpdateBlog};

const COLUMNS: &str = "id, user_id, user_name, user_image, name, summary, content, created_at";

/// Provides CRUD operations for blog posts.
pub struct BlogRepo;

impl BlogRepo {
    /// Insert a new post with a freshly generated id.
    pub async fn create(pool: &PgPool, input: &CreateBlog) -> Result<Blog, sqlx::Error> {
        let query = format!(
            "INSERT INTO blogs (id, user_id, user_name, user_image, name, summary, content)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Blog>(&query)
            .bind(next_id())
            .bind(&input.user_id)
            .bind(&input.user_name)
            .bind(&input.user_image)
            .bind(&input.name)
            .bind(&input.summary)
            .bind(&input.content)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Blog>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blogs WHERE id = $1");
        sqlx::query_as::<_, Blog>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(id) FROM blogs")
            .fetch_one(pool)
            .await
    }

    /// One page of posts, newest first.
    pub async fn list_page(
        pool: &PgPool,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Blog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM blogs ORDER BY created_at DESC, id DESC LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Blog>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Replace the editable text of a post.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: &str,
        input: &UpdateBlog,
    ) -> Result<Option<Blog>, sqlx::Error> {
        let query = format!(
            "UPDATE blogs SET name = $2, summary = $3, content = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Blog>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.summary)
            .bind(&input.content)
            .fetch_optional(pool)
            .await
    }

    /// Delete a post and, via `ON DELETE CASCADE`, its comments.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM blogs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

//! Repository for the `comments` table.

use awe_core::types::next_id;
use sqlx::PgPool;

use crate::models::comment::{Comment, CreateComment};

const COLUMNS: &str = "id, blog_id, user_id, user_name, user_image, content, created_at";

/// Provides CRUD operations for comments.
pub struct CommentRepo;

impl CommentRepo {
    pub async fn create(pool: &PgPool, input: &CreateComment) -> Result<Comment, sqlx::Error> {
        let query = format!(
            "INSERT INTO comments (id, blog_id, user_id, user_name, user_image, content)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(next_id())
            .bind(&input.blog_id)
            .bind(&input.user_id)
            .bind(&input.user_name)
            .bind(&input.user_image)
            .bind(&input.content)
            .fetch_one(pool)
            .await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(id) FROM comments")
            .fetch_one(pool)
            .await
    }

    /// One page of comments across all posts, newest first.
    pub async fn list_page(
        pool: &PgPool,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Comment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM comments ORDER BY created_at DESC, id DESC LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// All comments on one post, newest first.
    pub async fn list_by_blog(pool: &PgPool, blog_id: &str) -> Result<Vec<Comment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM comments WHERE blog_id = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(blog_id)
            .fetch_all(pool)
            .await
    }

    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

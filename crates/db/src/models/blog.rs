//! Blog post entity model and DTOs.

use awe_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `blogs` table. Author name and avatar are denormalized at
/// creation time.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Blog {
    pub id: DbId,
    pub user_id: DbId,
    pub user_name: String,
    pub user_image: String,
    pub name: String,
    pub summary: String,
    pub content: String,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone)]
pub struct CreateBlog {
    pub user_id: DbId,
    pub user_name: String,
    pub user_image: String,
    pub name: String,
    pub summary: String,
    pub content: String,
}

/// Replacement text for an existing post. All fields are required.
#[derive(Debug, Clone)]
pub struct UpdateBlog {
    pub name: String,
    pub summary: String,
    pub content: String,
}

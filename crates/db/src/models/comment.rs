//! Comment entity model and DTOs.

use awe_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Comment {
    pub id: DbId,
    pub blog_id: DbId,
    pub user_id: DbId,
    pub user_name: String,
    pub user_image: String,
    pub content: String,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone)]
pub struct CreateComment {
    pub blog_id: DbId,
    pub user_id: DbId,
    pub user_name: String,
    pub user_image: String,
    pub content: String,
}

//! User entity model and DTOs.

use awe_core::session::MASKED_SECRET;
use awe_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// `passwd` holds the stored password hash, which also keys the user's
/// session signatures. Call [`User::redacted`] before serializing a user to
/// any response.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub passwd: String,
    pub admin: bool,
    pub name: String,
    pub image: String,
    pub created_at: Timestamp,
}

impl User {
    /// Replace the password hash with a fixed placeholder.
    pub fn redacted(mut self) -> Self {
        self.passwd = MASKED_SECRET.to_string();
        self
    }
}

/// DTO for inserting a user. The id is chosen by the caller because the
/// password hash is bound to it.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub id: DbId,
    pub email: String,
    pub passwd: String,
    pub admin: bool,
    pub name: String,
    pub image: String,
}

//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod blog_repo;
pub mod comment_repo;
pub mod user_repo;

pub use blog_repo::BlogRepo;
pub use comment_repo::CommentRepo;
pub use user_repo::UserRepo;

//! Request handlers.
//!
//! Page handlers render templates; `/api/*` handlers return JSON. All of them
//! delegate storage to the repositories in `awe_db` and map errors via
//! [`AppError`](crate::error::AppError).

pub mod auth;
pub mod blogs;
pub mod comments;
pub mod manage;
pub mod pages;
pub mod users;

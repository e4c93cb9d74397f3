//! Shared response types for API handlers.

use axum::http::header::{LOCATION, SET_COOKIE};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use awe_core::paging::Page;
use serde::Serialize;

/// Body returned by the delete endpoints.
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub id: String,
}

/// One page of a listing: `{ "page": {...}, "<items>": [...] }`.
///
/// The item key differs per resource, so each listing declares its own
/// struct around [`Page`] rather than sharing a generic envelope.
#[derive(Debug, Serialize)]
pub struct BlogPage {
    pub page: Page,
    pub blogs: Vec<awe_db::models::blog::Blog>,
}

#[derive(Debug, Serialize)]
pub struct CommentPage {
    pub page: Page,
    pub comments: Vec<awe_db::models::comment::Comment>,
}

#[derive(Debug, Serialize)]
pub struct UserPage {
    pub page: Page,
    pub users: Vec<awe_db::models::user::User>,
}

/// `302 Found` to `location`.
pub fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(LOCATION, location.to_string())]).into_response()
}

/// `302 Found` to `location` that also sets a cookie.
pub fn found_with_cookie(location: &str, cookie: String) -> Response {
    (
        StatusCode::FOUND,
        [(LOCATION, location.to_string()), (SET_COOKIE, cookie)],
    )
        .into_response()
}

//! Shared query parameter types for page and API handlers.

use serde::Deserialize;

/// `?page=` on every paginated listing. Kept as a raw string so malformed
/// values fall back to the first page instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

impl PageParams {
    pub fn raw(&self) -> &str {
        self.page.as_deref().unwrap_or("1")
    }
}

/// `?id=` on the blog editor page.
#[derive(Debug, Deserialize)]
pub struct EditParams {
    pub id: Option<String>,
}

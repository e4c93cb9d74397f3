//! Page index parsing and offset/limit arithmetic for list endpoints.

use serde::Serialize;

/// Rows per page on every paginated listing.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Parse a raw `?page=` value into a 1-based page index.
///
/// Anything unparseable or below 1 becomes 1. There is no upper bound: a page
/// past the end is a valid request for an empty slice.
pub fn page_index(raw: &str) -> i64 {
    raw.trim().parse::<i64>().unwrap_or(1).max(1)
}

/// Pagination descriptor returned alongside list payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Page {
    pub item_count: i64,
    pub page_size: i64,
    pub page_index: i64,
    pub page_count: i64,
    pub offset: i64,
    pub limit: i64,
    pub has_next: bool,
    pub has_previous: bool,
}

impl Page {
    /// Build a descriptor for an already-parsed page index.
    pub fn new(item_count: i64, page_index: i64, page_size: i64) -> Self {
        let page_size = page_size.max(1);
        let page_index = page_index.max(1);
        let item_count = item_count.max(0);
        let page_count = ((item_count + page_size - 1) / page_size).max(1);

        Self {
            item_count,
            page_size,
            page_index,
            page_count,
            offset: (page_index - 1).saturating_mul(page_size),
            limit: page_size,
            has_next: page_index < page_count,
            has_previous: page_index > 1,
        }
    }

    /// Parse `raw` and build a descriptor. Never fails.
    pub fn compute(raw: &str, item_count: i64, page_size: i64) -> Self {
        Self::new(item_count, page_index(raw), page_size)
    }

    /// [`Page::compute`] with [`DEFAULT_PAGE_SIZE`].
    pub fn from_query(raw: &str, item_count: i64) -> Self {
        Self::compute(raw, item_count, DEFAULT_PAGE_SIZE)
    }
}

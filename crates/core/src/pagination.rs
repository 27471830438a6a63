//! Page/limit normalization and the list-envelope pagination metadata.

use serde::Serialize;

/// Default page size on the public catalog surface.
pub const PUBLIC_PAGE_SIZE: i64 = 12;

/// Default page size on the admin surface.
pub const ADMIN_PAGE_SIZE: i64 = 20;

/// A normalized pagination request. `page` and `limit` are both at least 1.
#[derive(Debug, Clone, Copy)]
pub struct PageRequest {
    pub page: i64,
    pub limit: i64,
}

impl PageRequest {
    /// Normalize raw query values: absent page defaults to 1, absent limit
    /// to `default_limit`, and both are floored at 1.
    pub fn new(page: Option<i64>, limit: Option<i64>, default_limit: i64) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            limit: limit.unwrap_or(default_limit).max(1),
        }
    }

    /// Zero-based row offset of the first item on this page.
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.limit
    }
}

/// Pagination metadata returned alongside every list result.
///
/// A page beyond the last one is not an error; it produces an empty items
/// array with this metadata still accurate.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: i64,
    pub total_pages: i64,
    pub total_items: i64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl Pagination {
    /// Compute the envelope metadata for a result set of `total_items` rows.
    ///
    /// `total_pages = ceil(total_items / limit)`, `has_next = page < total_pages`,
    /// `has_prev = page > 1`.
    pub fn compute(request: PageRequest, total_items: i64) -> Self {
        let total_pages = total_items / request.limit + i64::from(total_items % request.limit != 0);
        Self {
            current_page: request.page,
            total_pages,
            total_items,
            has_next: request.page < total_pages,
            has_prev: request.page > 1,
        }
    }
}

//! Shared response envelope types for API handlers.
//!
//! List endpoints return a `{ "perfumes": [...], "pagination": {...} }`
//! envelope. Use [`PerfumePage`] instead of ad-hoc `serde_json::json!`
//! to get compile-time type safety and consistent serialization.

use serde::Serialize;
use topnotes_core::pagination::Pagination;

/// Standard list envelope: one page of items plus pagination metadata.
#[derive(Debug, Serialize)]
pub struct PerfumePage<T: Serialize> {
    pub perfumes: Vec<T>,
    pub pagination: Pagination,
}

/// Plain `{ "message": ... }` acknowledgement body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

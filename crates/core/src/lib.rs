//! Domain logic shared by the database and API crates.
//!
//! Everything here is pure (no I/O): the error taxonomy, language and
//! bilingual-text types, pagination arithmetic, stock-status bucket
//! normalization, and the in-memory login rate limiter.

pub mod error;
pub mod i18n;
pub mod pagination;
pub mod rate_limit;
pub mod stock;
pub mod types;

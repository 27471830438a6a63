//! Opaque bearer token model.

use sqlx::FromRow;
use topnotes_core::types::{DbId, Timestamp};

/// A row from the `auth_tokens` table.
///
/// The token itself is the primary key; `admin_id` is UNIQUE so each
/// principal holds at most one token at a time.
#[derive(Debug, Clone, FromRow)]
pub struct AuthToken {
    pub token: String,
    pub admin_id: DbId,
    pub created_at: Timestamp,
}

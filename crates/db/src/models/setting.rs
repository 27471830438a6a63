//! Settings store model.

use sqlx::FromRow;
use topnotes_core::types::{DbId, Timestamp};

/// A row from the `settings` table. Keys are unique at the store level.
#[derive(Debug, Clone, FromRow)]
pub struct Setting {
    pub id: DbId,
    pub key: String,
    pub value: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

//! Admin principal model and DTOs.

use sqlx::FromRow;
use topnotes_core::types::{DbId, Timestamp};

/// Full admin row from the `admin` table.
///
/// Contains the password hash -- NEVER serialize this to API responses.
/// Handlers expose the principal through their own response types, which
/// carry the name only.
#[derive(Debug, Clone, FromRow)]
pub struct Admin {
    pub id: DbId,
    pub name: String,
    pub password_hash: String,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for provisioning a new admin.
#[derive(Debug)]
pub struct CreateAdmin {
    pub name: String,
    pub password_hash: String,
    pub is_staff: bool,
    pub is_superuser: bool,
}

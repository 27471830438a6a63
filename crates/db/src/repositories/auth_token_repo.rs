//! Repository for the `auth_tokens` table.

use sqlx::PgPool;
use topnotes_core::types::DbId;

use crate::models::admin::Admin;
use crate::models::auth_token::AuthToken;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "token, admin_id, created_at";

/// Provides operations for opaque bearer tokens.
pub struct AuthTokenRepo;

impl AuthTokenRepo {
    /// Return the admin's token, creating one from `candidate` if none exists.
    ///
    /// A single round trip: the UNIQUE constraint on `admin_id` plus a no-op
    /// conflict update lets RETURNING yield the existing token when there is
    /// one, so re-issuing is stable.
    pub async fn get_or_create(
        pool: &PgPool,
        admin_id: DbId,
        candidate: &str,
    ) -> Result<AuthToken, sqlx::Error> {
        let query = format!(
            "INSERT INTO auth_tokens (token, admin_id)
             VALUES ($1, $2)
             ON CONFLICT (admin_id) DO UPDATE SET admin_id = EXCLUDED.admin_id
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AuthToken>(&query)
            .bind(candidate)
            .bind(admin_id)
            .fetch_one(pool)
            .await
    }

    /// Resolve a bearer token to its owning admin.
    pub async fn find_admin_by_token(
        pool: &PgPool,
        token: &str,
    ) -> Result<Option<Admin>, sqlx::Error> {
        sqlx::query_as::<_, Admin>(
            "SELECT a.id, a.name, a.password_hash, a.is_staff, a.is_superuser,
                    a.is_active, a.created_at, a.updated_at
             FROM admin a
             JOIN auth_tokens t ON t.admin_id = a.id
             WHERE t.token = $1",
        )
        .bind(token)
        .fetch_optional(pool)
        .await
    }

    /// Delete every token owned by the admin. Returns the count of deleted rows.
    ///
    /// Called on password rotation to force re-login everywhere.
    pub async fn delete_all_for_admin(pool: &PgPool, admin_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM auth_tokens WHERE admin_id = $1")
            .bind(admin_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}

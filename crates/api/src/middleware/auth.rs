//! Bearer-token authentication extractors for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use topnotes_core::error::CoreError;
use topnotes_db::models::admin::Admin;
use topnotes_db::repositories::AuthTokenRepo;

use crate::error::AppError;
use crate::state::AppState;

/// Authenticated admin resolved from an opaque Bearer token in the
/// `Authorization` header.
///
/// Tokens are looked up in the token store on every request; a rotated
/// password deletes them, so revocation takes effect immediately.
#[derive(Debug, Clone)]
pub struct AuthAdmin(pub Admin);

impl FromRequestParts<AppState> for AuthAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let admin = AuthTokenRepo::find_admin_by_token(&state.pool, token)
            .await?
            .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Invalid token".into())))?;

        Ok(AuthAdmin(admin))
    }
}

/// Requires an authenticated admin with the staff flag. Rejects with 403
/// Forbidden otherwise.
///
/// ```ignore
/// async fn staff_only(RequireStaff(admin): RequireStaff) -> AppResult<Json<()>> {
///     // admin is guaranteed to be staff here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireStaff(pub Admin);

impl FromRequestParts<AppState> for RequireStaff {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let AuthAdmin(admin) = AuthAdmin::from_request_parts(parts, state).await?;
        if !admin.is_staff {
            return Err(AppError::Core(CoreError::Forbidden(
                "Staff privilege required".into(),
            )));
        }
        Ok(RequireStaff(admin))
    }
}

//! Handlers for admin authentication: login and password rotation.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use topnotes_core::error::CoreError;
use topnotes_db::repositories::{AdminRepo, AuthTokenRepo};

use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::auth::token::generate_token;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::RequireStaff;
use crate::middleware::client_key::ClientKey;
use crate::response::MessageResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /admin/login`. The name is optional and falls
/// back to the configured default admin name.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub name: Option<String>,
    pub password: Option<String>,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub token: String,
    pub admin: AdminInfo,
}

/// Public admin info embedded in [`LoginResponse`].
#[derive(Debug, Serialize)]
pub struct AdminInfo {
    pub name: String,
}

/// Request body for `POST /admin/update-password`.
#[derive(Debug, Deserialize)]
pub struct UpdatePasswordRequest {
    pub password: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /admin/login
///
/// Authenticate with name + password and return the principal's bearer
/// token. Failed attempts count against the client key; five failures
/// within the window block further attempts regardless of credentials.
pub async fn login(
    State(state): State<AppState>,
    ClientKey(client_key): ClientKey,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    // 1. A password is required before anything else is considered.
    let password = match input.password {
        Some(p) if !p.is_empty() => p,
        _ => {
            return Err(AppError::Core(CoreError::Validation(
                "Password is required.".into(),
            )))
        }
    };

    // 2. Blocked clients are rejected independent of credential correctness.
    if state.login_limiter.is_blocked(&client_key) {
        return Err(AppError::Core(CoreError::RateLimited(
            "Too many login attempts. Please try again in 15 minutes.".into(),
        )));
    }

    // 3. Resolve the principal. An omitted name means the configured
    //    default admin.
    let name = input
        .name
        .unwrap_or_else(|| state.config.default_admin_name.clone());

    // 4. An unknown name and a wrong password are indistinguishable to the
    //    client; both count as a failure.
    let admin = match AdminRepo::find_by_name(&state.pool, &name).await? {
        Some(admin) => {
            let valid = verify_password(&password, &admin.password_hash)
                .map_err(|e| AppError::Internal(format!("Password verification error: {e}")))?;
            valid.then_some(admin)
        }
        None => None,
    };

    let Some(admin) = admin else {
        let attempts = state.login_limiter.record_failure(&client_key);
        tracing::warn!(client_key = %client_key, attempts, "Failed admin login attempt");
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid credentials".into(),
        )));
    };

    // 5. Success: clear the failure counter before issuing the token.
    state.login_limiter.reset(&client_key);

    let token = AuthTokenRepo::get_or_create(&state.pool, admin.id, &generate_token()).await?;
    tracing::info!(admin = %admin.name, "Admin login successful");

    Ok(Json(LoginResponse {
        message: "Login successful",
        token: token.token,
        admin: AdminInfo { name: admin.name },
    }))
}

/// POST /admin/update-password
///
/// Rotate the authenticated admin's password, then delete every
/// outstanding token for the principal so all sessions must log in again.
pub async fn update_password(
    State(state): State<AppState>,
    RequireStaff(admin): RequireStaff,
    Json(input): Json<UpdatePasswordRequest>,
) -> AppResult<Json<MessageResponse>> {
    let password = input.password.unwrap_or_default();
    validate_password_strength(&password)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let password_hash = hash_password(&password)
        .map_err(|e| AppError::Internal(format!("Password hashing error: {e}")))?;

    AdminRepo::update_password(&state.pool, admin.id, &password_hash).await?;

    let revoked = AuthTokenRepo::delete_all_for_admin(&state.pool, admin.id).await?;
    tracing::info!(admin = %admin.name, revoked, "Password rotated, tokens invalidated");

    Ok(Json(MessageResponse {
        message: "Password updated successfully",
    }))
}

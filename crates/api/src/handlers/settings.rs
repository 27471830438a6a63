//! Handlers for the admin settings store.

use std::collections::BTreeMap;

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use topnotes_core::error::CoreError;
use topnotes_db::repositories::SettingRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::RequireStaff;
use crate::response::MessageResponse;
use crate::state::AppState;

/// Request body for `PUT /admin/settings`.
#[derive(Debug, Deserialize)]
pub struct UpsertSettingRequest {
    pub key: Option<String>,
    pub value: Option<String>,
}

/// GET /admin/settings
///
/// Return every setting as a flat `{key: value}` object.
pub async fn get_settings(
    State(state): State<AppState>,
    RequireStaff(_admin): RequireStaff,
) -> AppResult<Json<BTreeMap<String, String>>> {
    let settings = SettingRepo::list_all(&state.pool).await?;
    let map = settings.into_iter().map(|s| (s.key, s.value)).collect();
    Ok(Json(map))
}

/// PUT /admin/settings
///
/// Upsert a single key. An empty value is allowed; a missing one is not.
pub async fn put_setting(
    State(state): State<AppState>,
    RequireStaff(_admin): RequireStaff,
    Json(input): Json<UpsertSettingRequest>,
) -> AppResult<Json<MessageResponse>> {
    let key = input.key.unwrap_or_default();
    let Some(value) = input.value else {
        return Err(AppError::Core(CoreError::Validation(
            "Key and value are required.".into(),
        )));
    };
    if key.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Key and value are required.".into(),
        )));
    }

    SettingRepo::upsert(&state.pool, &key, &value).await?;

    Ok(Json(MessageResponse {
        message: "Setting updated successfully",
    }))
}

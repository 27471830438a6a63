//! Route definitions for the settings store.

use axum::routing::get;
use axum::Router;

use crate::handlers::settings;
use crate::state::AppState;

/// Settings routes (staff only).
///
/// ```text
/// GET /admin/settings  -> get_settings
/// PUT /admin/settings  -> put_setting
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/admin/settings",
        get(settings::get_settings).put(settings::put_setting),
    )
}

//! Route definitions for admin authentication.

use axum::routing::post;
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Authentication routes.
///
/// ```text
/// POST /admin/login            -> login (public)
/// POST /admin/update-password  -> update_password (staff)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admin/login", post(auth::login))
        .route("/admin/update-password", post(auth::update_password))
}

pub mod admin_perfumes;
pub mod auth;
pub mod catalog;
pub mod health;
pub mod settings;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree (everything except `/health`).
///
/// Route hierarchy:
///
/// ```text
/// /perfumes                        public list (GET)
/// /perfumes/{id}                   public detail (GET)
/// /brands                          distinct brands (GET)
/// /categories                      distinct categories (GET)
///
/// /admin/login                     login (POST, public)
/// /admin/update-password           rotate password (POST, staff)
/// /admin/settings                  settings map / upsert (GET, PUT, staff)
///
/// /admin/perfumes                  list, create (GET, POST, staff)
/// /admin/perfumes/{id}             get, update, patch, delete (staff)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(catalog::router())
        .merge(auth::router())
        .merge(settings::router())
        .merge(admin_perfumes::router())
}

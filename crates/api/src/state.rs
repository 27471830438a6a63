use std::sync::Arc;

use topnotes_core::rate_limit::LoginRateLimiter;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: topnotes_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Failed-login counters, shared across requests.
    pub login_limiter: Arc<LoginRateLimiter>,
}

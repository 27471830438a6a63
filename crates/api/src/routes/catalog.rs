//! Route definitions for the public catalog surface.

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Public read-only routes mounted at the root.
///
/// ```text
/// GET /perfumes        -> list_perfumes
/// GET /perfumes/{id}   -> get_perfume
/// GET /brands          -> list_brands
/// GET /categories      -> list_categories
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/perfumes", get(catalog::list_perfumes))
        .route("/perfumes/{id}", get(catalog::get_perfume))
        .route("/brands", get(catalog::list_brands))
        .route("/categories", get(catalog::list_categories))
}

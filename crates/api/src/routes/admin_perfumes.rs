//! Route definitions for the staff catalog CRUD surface.

use axum::routing::get;
use axum::Router;

use crate::handlers::admin_perfumes;
use crate::state::AppState;

/// Admin catalog routes (staff only).
///
/// ```text
/// GET    /admin/perfumes       -> list
/// POST   /admin/perfumes       -> create
/// GET    /admin/perfumes/{id}  -> retrieve
/// PUT    /admin/perfumes/{id}  -> update
/// PATCH  /admin/perfumes/{id}  -> partial_update
/// DELETE /admin/perfumes/{id}  -> destroy
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/admin/perfumes",
            get(admin_perfumes::list).post(admin_perfumes::create),
        )
        .route(
            "/admin/perfumes/{id}",
            get(admin_perfumes::retrieve)
                .put(admin_perfumes::update)
                .patch(admin_perfumes::partial_update)
                .delete(admin_perfumes::destroy),
        )
}

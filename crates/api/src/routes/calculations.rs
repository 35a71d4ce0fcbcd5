//! Route definitions for the `/calculations` resource.
//!
//! All endpoints require authentication; visibility is owner-scoped.
//! Derived columns are write-once, so there is no update route.

use axum::routing::get;
use axum::Router;

use crate::handlers::calculations;
use crate::state::AppState;

/// Routes mounted at `/calculations`.
///
/// ```text
/// GET    /        -> list_calculations
/// POST   /        -> create_calculation
/// GET    /{id}    -> get_calculation
/// DELETE /{id}    -> delete_calculation
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(calculations::list_calculations).post(calculations::create_calculation),
        )
        .route(
            "/{id}",
            get(calculations::get_calculation).delete(calculations::delete_calculation),
        )
}

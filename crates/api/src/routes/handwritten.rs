//! Route definitions for the `/handwritten` resource.
//!
//! All endpoints require authentication; visibility is owner-scoped.
//! Derived columns are write-once, so there is no update route.

use axum::routing::get;
use axum::Router;

use crate::handlers::handwritten;
use crate::state::AppState;

/// Routes mounted at `/handwritten`.
///
/// ```text
/// GET    /        -> list_captures
/// POST   /        -> create_capture (multipart image)
/// GET    /{id}    -> get_capture
/// DELETE /{id}    -> delete_capture
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handwritten::list_captures).post(handwritten::create_capture),
        )
        .route(
            "/{id}",
            get(handwritten::get_capture).delete(handwritten::delete_capture),
        )
}

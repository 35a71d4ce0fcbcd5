//! Route definitions for the `/profiles` resource.
//!
//! All endpoints require authentication and only ever expose the caller's
//! own profile.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::profiles;
use crate::state::AppState;

/// Routes mounted at `/profiles`.
///
/// ```text
/// GET    /               -> list_profiles
/// GET    /{id}           -> get_profile
/// PUT    /{id}           -> update_profile
/// PUT    /{id}/picture   -> upload_picture (multipart)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(profiles::list_profiles))
        .route(
            "/{id}",
            get(profiles::get_profile).put(profiles::update_profile),
        )
        .route("/{id}/picture", put(profiles::upload_picture))
}

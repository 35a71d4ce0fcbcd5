//! Route definitions for the `/token` resource (bearer-token issuance).

use axum::routing::post;
use axum::Router;

use crate::handlers::token;
use crate::state::AppState;

/// Routes mounted at `/token`.
///
/// ```text
/// POST   /          -> obtain (public)
/// POST   /refresh   -> refresh (public)
/// POST   /revoke    -> revoke (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(token::obtain))
        .route("/refresh", post(token::refresh))
        .route("/revoke", post(token::revoke))
}

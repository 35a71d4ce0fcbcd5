//! Route definitions for the `/speech` resource.
//!
//! All endpoints require authentication; visibility is owner-scoped.
//! The get route doubles as the transcription polling interface.

use axum::routing::get;
use axum::Router;

use crate::handlers::speech;
use crate::state::AppState;

/// Routes mounted at `/speech`.
///
/// ```text
/// GET    /        -> list_transcripts
/// POST   /        -> create_transcript (multipart audio)
/// GET    /{id}    -> get_transcript (poll status)
/// DELETE /{id}    -> delete_transcript
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(speech::list_transcripts).post(speech::create_transcript),
        )
        .route(
            "/{id}",
            get(speech::get_transcript).delete(speech::delete_transcript),
        )
}

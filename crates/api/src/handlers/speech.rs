//! Handlers for the `/speech` resource.
//!
//! Creation stores the uploaded audio, inserts the row as `pending`, and
//! hands the bytes to a background transcription task; the request returns
//! 201 immediately. Clients poll `GET /speech/{id}` until the status
//! settles to `done` or `failed`. `transcribed_text` is server-derived and
//! rejected if a client tries to supply it.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use starlus_core::error::CoreError;
use starlus_core::types::DbId;
use starlus_db::models::speech_transcript::NewSpeechTranscript;
use starlus_db::repositories::SpeechRepo;

use crate::enrich::spawn_transcription;
use crate::error::{AppError, AppResult};
use crate::handlers::extract_upload;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::storage;

/// GET /api/v1/speech
pub async fn list_transcripts(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let transcripts = SpeechRepo::list_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: transcripts }))
}

/// POST /api/v1/speech
///
/// Multipart upload with an `audio` file field.
pub async fn create_transcript(
    auth: AuthUser,
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let upload = extract_upload(multipart, "audio", &["transcribed_text"]).await?;

    let audio_path = storage::save_upload(
        &state.config.media_root,
        storage::SPEECH_DIR,
        &upload.file_name,
        &upload.data,
    )
    .await
    .map_err(|e| AppError::InternalError(format!("Failed to store audio: {e}")))?;

    let transcript = SpeechRepo::create(
        &state.pool,
        auth.user_id,
        &NewSpeechTranscript { audio_path },
    )
    .await?;

    tracing::info!(
        user_id = auth.user_id,
        transcript_id = transcript.id,
        "Speech capture created, transcription queued"
    );

    spawn_transcription(
        state.clone(),
        transcript.id,
        upload.data,
        upload.content_type,
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: transcript })))
}

/// GET /api/v1/speech/{id}
///
/// Poll the transcription status.
pub async fn get_transcript(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let transcript = SpeechRepo::find_for_user(&state.pool, id, auth.user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "SpeechTranscript",
                id,
            })
        })?;

    Ok(Json(DataResponse { data: transcript }))
}

/// DELETE /api/v1/speech/{id}
///
/// Removes the database row and the stored audio.
pub async fn delete_transcript(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let transcript = SpeechRepo::find_for_user(&state.pool, id, auth.user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "SpeechTranscript",
                id,
            })
        })?;

    SpeechRepo::delete_for_user(&state.pool, id, auth.user_id).await?;
    storage::remove_upload(&state.config.media_root, &transcript.audio_path).await;

    tracing::info!(user_id = auth.user_id, transcript_id = id, "Speech capture deleted");

    Ok(StatusCode::NO_CONTENT)
}

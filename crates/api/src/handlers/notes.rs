//! Handlers for the `/notes` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use starlus_core::error::CoreError;
use starlus_core::notes::validate_title;
use starlus_core::types::DbId;
use starlus_db::models::note::{CreateNote, UpdateNote};
use starlus_db::repositories::NoteRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/notes
///
/// List the caller's notes.
pub async fn list_notes(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let notes = NoteRepo::list_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: notes }))
}

/// POST /api/v1/notes
pub async fn create_note(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateNote>,
) -> AppResult<impl IntoResponse> {
    validate_title(&input.title).map_err(AppError::BadRequest)?;

    let note = NoteRepo::create(&state.pool, auth.user_id, &input).await?;

    tracing::info!(user_id = auth.user_id, note_id = note.id, "Note created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: note })))
}

/// GET /api/v1/notes/{id}
pub async fn get_note(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let note = NoteRepo::find_for_user(&state.pool, id, auth.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Note", id }))?;

    Ok(Json(DataResponse { data: note }))
}

/// PUT /api/v1/notes/{id}
pub async fn update_note(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateNote>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref title) = input.title {
        validate_title(title).map_err(AppError::BadRequest)?;
    }

    let note = NoteRepo::update_for_user(&state.pool, id, auth.user_id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Note", id }))?;

    tracing::info!(user_id = auth.user_id, note_id = id, "Note updated");

    Ok(Json(DataResponse { data: note }))
}

/// DELETE /api/v1/notes/{id}
pub async fn delete_note(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = NoteRepo::delete_for_user(&state.pool, id, auth.user_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Note", id }));
    }

    tracing::info!(user_id = auth.user_id, note_id = id, "Note deleted");

    Ok(StatusCode::NO_CONTENT)
}

//! Handlers for the `/handwritten` resource.
//!
//! Creation stores the uploaded image and runs recognition synchronously;
//! the row is born with its final status. `recognized_text` is
//! server-derived and rejected if a client tries to supply it.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use starlus_core::error::CoreError;
use starlus_core::types::DbId;
use starlus_db::repositories::HandwrittenRepo;

use crate::enrich::recognize_handwriting;
use crate::error::{AppError, AppResult};
use crate::handlers::extract_upload;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::storage;

/// GET /api/v1/handwritten
pub async fn list_captures(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let captures = HandwrittenRepo::list_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: captures }))
}

/// POST /api/v1/handwritten
///
/// Multipart upload with an `image` file field.
pub async fn create_capture(
    auth: AuthUser,
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let upload = extract_upload(multipart, "image", &["recognized_text"]).await?;

    let image_path = storage::save_upload(
        &state.config.media_root,
        storage::HANDWRITTEN_DIR,
        &upload.file_name,
        &upload.data,
    )
    .await
    .map_err(|e| AppError::InternalError(format!("Failed to store image: {e}")))?;

    let enriched = recognize_handwriting(&state, image_path, &upload.data);
    let capture = HandwrittenRepo::create(&state.pool, auth.user_id, &enriched).await?;

    tracing::info!(
        user_id = auth.user_id,
        capture_id = capture.id,
        status = %capture.status,
        "Handwritten capture created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: capture })))
}

/// GET /api/v1/handwritten/{id}
pub async fn get_capture(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let capture = HandwrittenRepo::find_for_user(&state.pool, id, auth.user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "HandwrittenText",
                id,
            })
        })?;

    Ok(Json(DataResponse { data: capture }))
}

/// DELETE /api/v1/handwritten/{id}
///
/// Removes the database row and the stored image.
pub async fn delete_capture(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let capture = HandwrittenRepo::find_for_user(&state.pool, id, auth.user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "HandwrittenText",
                id,
            })
        })?;

    HandwrittenRepo::delete_for_user(&state.pool, id, auth.user_id).await?;
    storage::remove_upload(&state.config.media_root, &capture.image_path).await;

    tracing::info!(user_id = auth.user_id, capture_id = id, "Handwritten capture deleted");

    Ok(StatusCode::NO_CONTENT)
}

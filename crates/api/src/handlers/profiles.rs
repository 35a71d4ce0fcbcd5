//! Handlers for the `/profiles` resource.
//!
//! Profiles are created by registration, not by a client request, so this
//! surface is read + update only. Callers only ever see their own single
//! profile.

use axum::extract::{Multipart, Path, State};
use axum::response::IntoResponse;
use axum::Json;
use starlus_core::error::CoreError;
use starlus_core::profile::validate_bio;
use starlus_core::types::DbId;
use starlus_db::models::profile::UpdateProfile;
use starlus_db::repositories::ProfileRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::extract_upload;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::storage;

/// GET /api/v1/profiles
///
/// List the caller's profiles (a single-element collection).
pub async fn list_profiles(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let profiles = ProfileRepo::list_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: profiles }))
}

/// GET /api/v1/profiles/{id}
pub async fn get_profile(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let profile = ProfileRepo::find_for_user(&state.pool, id, auth.user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Profile",
                id,
            })
        })?;

    Ok(Json(DataResponse { data: profile }))
}

/// PUT /api/v1/profiles/{id}
///
/// Update the bio.
pub async fn update_profile(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProfile>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref bio) = input.bio {
        validate_bio(bio).map_err(AppError::BadRequest)?;
    }

    let profile = ProfileRepo::update_bio(&state.pool, id, auth.user_id, input.bio.as_deref())
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Profile",
                id,
            })
        })?;

    tracing::info!(user_id = auth.user_id, profile_id = id, "Profile updated");

    Ok(Json(DataResponse { data: profile }))
}

/// PUT /api/v1/profiles/{id}/picture
///
/// Upload a profile picture (multipart field `picture`). Replaces and
/// removes any previous picture file.
pub async fn upload_picture(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    // Resolve ownership before touching the filesystem.
    let existing = ProfileRepo::find_for_user(&state.pool, id, auth.user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Profile",
                id,
            })
        })?;

    let upload = extract_upload(multipart, "picture", &[]).await?;

    let picture_path = storage::save_upload(
        &state.config.media_root,
        storage::PROFILE_PICTURES_DIR,
        &upload.file_name,
        &upload.data,
    )
    .await
    .map_err(|e| AppError::InternalError(format!("Failed to store picture: {e}")))?;

    let profile = ProfileRepo::set_picture(&state.pool, id, auth.user_id, &picture_path)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Profile",
                id,
            })
        })?;

    if let Some(old_path) = existing.picture_path {
        storage::remove_upload(&state.config.media_root, &old_path).await;
    }

    tracing::info!(
        user_id = auth.user_id,
        profile_id = id,
        "Profile picture replaced"
    );

    Ok(Json(DataResponse { data: profile }))
}

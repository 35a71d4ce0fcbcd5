//! Media storage on the local filesystem.
//!
//! Uploads are written under `MEDIA_ROOT` in a per-kind subdirectory with a
//! random file name; the relative path is what the database rows carry and
//! what `/media` serves.

use std::path::{Path, PathBuf};

use uuid::Uuid;

/// Subdirectory for profile pictures.
pub const PROFILE_PICTURES_DIR: &str = "profile_pictures";
/// Subdirectory for handwritten capture images.
pub const HANDWRITTEN_DIR: &str = "handwritten";
/// Subdirectory for speech capture audio.
pub const SPEECH_DIR: &str = "speech";

/// Save an upload as `<media_root>/<subdir>/<uuid>.<ext>` and return the
/// relative path (`<subdir>/<uuid>.<ext>`).
///
/// The extension is taken from the uploaded file name but restricted to
/// short alphanumeric suffixes, so a hostile file name cannot influence
/// where the file lands.
pub async fn save_upload(
    media_root: &str,
    subdir: &str,
    original_name: &str,
    data: &[u8],
) -> std::io::Result<String> {
    let ext = sanitize_extension(original_name);
    let file_name = format!("{}.{ext}", Uuid::new_v4());

    let dir = PathBuf::from(media_root).join(subdir);
    tokio::fs::create_dir_all(&dir).await?;
    tokio::fs::write(dir.join(&file_name), data).await?;

    Ok(format!("{subdir}/{file_name}"))
}

/// Best-effort removal of a stored file. Missing files are not an error;
/// callers delete the database row regardless.
pub async fn remove_upload(media_root: &str, relative_path: &str) {
    let path = PathBuf::from(media_root).join(relative_path);
    if let Err(e) = tokio::fs::remove_file(&path).await {
        if e.kind() != std::io::ErrorKind::NotFound {
            tracing::warn!(path = %path.display(), error = %e, "Failed to remove media file");
        }
    }
}

fn sanitize_extension(original_name: &str) -> String {
    Path::new(original_name)
        .extension()
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty() && e.len() <= 8 && e.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_else(|| "bin".to_string())
}

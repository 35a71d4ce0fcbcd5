//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers validate input, delegate to the corresponding repository in
//! `starlus_db` scoped by the authenticated owner, and map errors via
//! [`AppError`](crate::error::AppError).

pub mod calculations;
pub mod handwritten;
pub mod notes;
pub mod profiles;
pub mod speech;
pub mod token;
pub mod users;

use axum::extract::Multipart;

use crate::error::AppError;

/// A file pulled out of a multipart request body.
pub(crate) struct UploadedFile {
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

/// Read a multipart body, returning the file uploaded under `field_name`.
///
/// Fields named in `derived_fields` are rejected outright: those columns
/// are server-derived and a client supplying them is an error, not
/// something to silently overwrite. Unknown extra fields are ignored.
pub(crate) async fn extract_upload(
    mut multipart: Multipart,
    field_name: &str,
    derived_fields: &[&str],
) -> Result<UploadedFile, AppError> {
    let mut upload = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();

        if derived_fields.contains(&name.as_str()) {
            return Err(AppError::BadRequest(format!(
                "Field '{name}' is server-derived and cannot be supplied"
            )));
        }

        if name == field_name {
            let file_name = field.file_name().unwrap_or("upload").to_string();
            let content_type = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            upload = Some(UploadedFile {
                file_name,
                content_type,
                data: data.to_vec(),
            });
        }
    }

    upload.ok_or_else(|| {
        AppError::BadRequest(format!("Missing required '{field_name}' file field"))
    })
}

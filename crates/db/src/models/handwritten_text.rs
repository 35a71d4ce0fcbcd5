//! Handwritten text capture model and DTO.

use serde::Serialize;
use sqlx::FromRow;
use starlus_core::types::{DbId, Timestamp};

/// A row from the `handwritten_texts` table.
///
/// `recognized_text` is server-derived (never client-supplied) and stays
/// NULL unless `status` is `done`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HandwrittenText {
    pub id: DbId,
    pub user_id: DbId,
    /// Relative media path of the uploaded image, served under `/media`.
    pub image_path: String,
    pub recognized_text: Option<String>,
    pub status: String,
    pub error: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Insert DTO, built by the handler after running recognition. Recognition
/// is synchronous, so the row is born with its final status.
#[derive(Debug)]
pub struct NewHandwrittenText {
    pub image_path: String,
    pub status: String,
    pub recognized_text: Option<String>,
    pub error: Option<String>,
}

//! Note entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use starlus_core::types::{DbId, Timestamp};

/// A row from the `notes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Note {
    pub id: DbId,
    pub user_id: DbId,
    pub title: String,
    pub content: String,
    pub is_exam_mode: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for `POST /notes`.
#[derive(Debug, Deserialize)]
pub struct CreateNote {
    pub title: String,
    pub content: String,
    pub is_exam_mode: Option<bool>,
}

/// Request body for `PUT /notes/{id}`. All fields optional; absent fields
/// keep their current value.
#[derive(Debug, Deserialize)]
pub struct UpdateNote {
    pub title: Option<String>,
    pub content: Option<String>,
    pub is_exam_mode: Option<bool>,
}

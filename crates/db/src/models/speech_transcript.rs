//! Speech transcript model and DTO.

use serde::Serialize;
use sqlx::FromRow;
use starlus_core::types::{DbId, Timestamp};

/// A row from the `speech_transcripts` table.
///
/// Transcription runs in a background task after creation, so the row is
/// inserted with `status = pending` and settles to `done` (with
/// `transcribed_text`) or `failed` (with `error`). Clients poll the get
/// endpoint to observe the transition.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SpeechTranscript {
    pub id: DbId,
    pub user_id: DbId,
    /// Relative media path of the uploaded audio, served under `/media`.
    pub audio_path: String,
    pub transcribed_text: Option<String>,
    pub status: String,
    pub error: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Insert DTO; the row always starts pending.
#[derive(Debug)]
pub struct NewSpeechTranscript {
    pub audio_path: String,
}

//! Repository for the `speech_transcripts` table.

use sqlx::PgPool;
use starlus_core::enrichment::{STATUS_DONE, STATUS_FAILED, STATUS_PENDING};
use starlus_core::types::DbId;

use crate::models::speech_transcript::{NewSpeechTranscript, SpeechTranscript};

/// Column list for speech_transcripts queries.
const COLUMNS: &str =
    "id, user_id, audio_path, transcribed_text, status, error, created_at, updated_at";

/// Provides owner-scoped persistence for speech captures, plus the
/// completion methods the background transcription task calls. Completion
/// is not owner-scoped -- it runs server-side against a row id the server
/// itself just created.
pub struct SpeechRepo;

impl SpeechRepo {
    /// Insert a capture in the `pending` state.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &NewSpeechTranscript,
    ) -> Result<SpeechTranscript, sqlx::Error> {
        let query = format!(
            "INSERT INTO speech_transcripts (user_id, audio_path, status)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SpeechTranscript>(&query)
            .bind(user_id)
            .bind(&input.audio_path)
            .bind(STATUS_PENDING)
            .fetch_one(pool)
            .await
    }

    /// List a user's captures, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<SpeechTranscript>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM speech_transcripts
             WHERE user_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, SpeechTranscript>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Find a capture by id, visible only to its owner.
    pub async fn find_for_user(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<SpeechTranscript>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM speech_transcripts WHERE id = $1 AND user_id = $2"
        );
        sqlx::query_as::<_, SpeechTranscript>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a user's capture. Returns `true` if a row was deleted.
    pub async fn delete_for_user(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM speech_transcripts WHERE id = $1 AND user_id = $2")
                .bind(id)
                .bind(user_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Record a successful transcription.
    pub async fn mark_done(pool: &PgPool, id: DbId, text: &str) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE speech_transcripts
             SET status = $2, transcribed_text = $3, error = NULL, updated_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .bind(STATUS_DONE)
        .bind(text)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Record a failed transcription; the record stays retrievable.
    pub async fn mark_failed(pool: &PgPool, id: DbId, error: &str) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE speech_transcripts
             SET status = $2, error = $3, updated_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .bind(STATUS_FAILED)
        .bind(error)
        .execute(pool)
        .await?;
        Ok(())
    }
}

//! Create-time enrichment drivers.
//!
//! Each resource kind derives one field from its raw input at creation:
//! handwritten captures get recognized text (synchronous), calculations get
//! an evaluated result (synchronous), speech captures get a transcript
//! (background task; the row settles from `pending` to `done` or `failed`).
//! Provider and evaluator failures never fail the HTTP request -- they are
//! folded into the record's status/error columns.

use starlus_core::calc;
use starlus_core::enrichment::{STATUS_DONE, STATUS_FAILED};
use starlus_core::types::DbId;
use starlus_db::models::calculation::NewCalculation;
use starlus_db::models::handwritten_text::NewHandwrittenText;
use starlus_db::repositories::SpeechRepo;

use crate::state::AppState;

/// Run handwriting recognition over the uploaded image and fold the outcome
/// into an insert DTO.
pub fn recognize_handwriting(
    state: &AppState,
    image_path: String,
    image: &[u8],
) -> NewHandwrittenText {
    match state.handwriting.recognize(image) {
        Ok(text) => NewHandwrittenText {
            image_path,
            status: STATUS_DONE.to_string(),
            recognized_text: Some(text),
            error: None,
        },
        Err(e) => NewHandwrittenText {
            image_path,
            status: STATUS_FAILED.to_string(),
            recognized_text: None,
            error: Some(e.to_string()),
        },
    }
}

/// Evaluate an arithmetic expression and fold the outcome into an insert
/// DTO.
pub fn evaluate_expression(expression: String) -> NewCalculation {
    match calc::evaluate(&expression) {
        Ok(value) => NewCalculation {
            expression,
            status: STATUS_DONE.to_string(),
            result: Some(calc::format_value(value)),
            error: None,
        },
        Err(e) => NewCalculation {
            expression,
            status: STATUS_FAILED.to_string(),
            result: None,
            error: Some(e.to_string()),
        },
    }
}

/// Spawn the detached transcription task for a freshly created speech
/// capture. The task calls the provider and records the outcome; there is
/// no retry -- a failure is terminal and visible to the polling client.
pub fn spawn_transcription(
    state: AppState,
    transcript_id: DbId,
    audio: Vec<u8>,
    content_type: String,
) {
    tokio::spawn(async move {
        match state.transcriber.transcribe(&audio, &content_type).await {
            Ok(text) => {
                tracing::info!(transcript_id, "Transcription completed");
                if let Err(e) = SpeechRepo::mark_done(&state.pool, transcript_id, &text).await {
                    tracing::error!(
                        transcript_id,
                        error = %e,
                        "Failed to record transcription result"
                    );
                }
            }
            Err(provider_err) => {
                tracing::warn!(transcript_id, error = %provider_err, "Transcription failed");
                if let Err(e) =
                    SpeechRepo::mark_failed(&state.pool, transcript_id, &provider_err.to_string())
                        .await
                {
                    tracing::error!(
                        transcript_id,
                        error = %e,
                        "Failed to record transcription failure"
                    );
                }
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_expression_folds_to_done() {
        let row = evaluate_expression("2+2".to_string());
        assert_eq!(row.status, STATUS_DONE);
        assert_eq!(row.result.as_deref(), Some("4"));
        assert!(row.error.is_none());
    }

    #[test]
    fn invalid_expression_folds_to_failed() {
        let row = evaluate_expression("1/0".to_string());
        assert_eq!(row.status, STATUS_FAILED);
        assert!(row.result.is_none());
        assert_eq!(row.error.as_deref(), Some("division by zero"));
    }
}

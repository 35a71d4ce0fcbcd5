use std::sync::Arc;

use starlus_core::recognition::{HandwritingRecognizer, SpeechRecognizer};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already
/// `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: starlus_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Handwriting recognition provider (currently the placeholder stub).
    pub handwriting: Arc<dyn HandwritingRecognizer>,
    /// Speech recognition provider, called from the transcription task.
    pub transcriber: Arc<dyn SpeechRecognizer>,
}

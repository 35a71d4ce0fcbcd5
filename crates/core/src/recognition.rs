//! Provider seams for the enrichment pipeline.
//!
//! Handwriting recognition and speech transcription are external
//! collaborators: image/audio bytes in, text out. Handlers depend on these
//! traits so the concrete provider (HTTP client, stub, test mock) is an
//! injection decision, not a handler concern.

use async_trait::async_trait;

/// Error returned by a recognition provider.
#[derive(Debug, thiserror::Error)]
pub enum RecognitionError {
    /// The payload could not be decoded by the provider (bad audio/image).
    #[error("unreadable payload: {0}")]
    UnreadablePayload(String),

    /// The provider was reached but reported a failure.
    #[error("provider error: {0}")]
    Provider(String),

    /// The provider could not be reached at all.
    #[error("provider unreachable: {0}")]
    Unreachable(String),
}

/// Image bytes -> recognized text.
pub trait HandwritingRecognizer: Send + Sync {
    fn recognize(&self, image: &[u8]) -> Result<String, RecognitionError>;
}

/// Audio bytes -> transcript text.
#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    async fn transcribe(
        &self,
        audio: &[u8],
        content_type: &str,
    ) -> Result<String, RecognitionError>;
}

/// Text returned for every handwritten upload until real recognition lands.
pub const PLACEHOLDER_RECOGNIZED_TEXT: &str = "Text recognition will be implemented";

/// Stub recognizer: returns [`PLACEHOLDER_RECOGNIZED_TEXT`] for any input.
///
/// Real OCR is not wired up yet; keeping the stub behind the trait means the
/// handlers will not change when it is.
#[derive(Debug, Default, Clone)]
pub struct PlaceholderRecognizer;

impl HandwritingRecognizer for PlaceholderRecognizer {
    fn recognize(&self, _image: &[u8]) -> Result<String, RecognitionError> {
        Ok(PLACEHOLDER_RECOGNIZED_TEXT.to_string())
    }
}

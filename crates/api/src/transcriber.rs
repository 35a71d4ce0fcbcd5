//! HTTP client for the external speech recognition provider.
//!
//! Wire contract: POST the raw audio bytes with their content type to the
//! configured endpoint; the provider answers `{"transcript": "..."}` on
//! success. 4xx responses mean the payload itself was unreadable; other
//! failures are provider or network trouble. Either way the caller records
//! the failure on the capture row rather than surfacing an HTTP error.

use async_trait::async_trait;
use serde::Deserialize;
use starlus_core::recognition::{RecognitionError, SpeechRecognizer};

/// Successful provider response body.
#[derive(Debug, Deserialize)]
struct TranscribeResponse {
    transcript: String,
}

/// Speech recognition provider reached over HTTP.
pub struct HttpTranscriber {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTranscriber {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl SpeechRecognizer for HttpTranscriber {
    async fn transcribe(
        &self,
        audio: &[u8],
        content_type: &str,
    ) -> Result<String, RecognitionError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(audio.to_vec())
            .send()
            .await
            .map_err(|e| RecognitionError::Unreachable(e.to_string()))?;

        let status = response.status();
        if status.is_client_error() {
            let detail = response.text().await.unwrap_or_default();
            return Err(RecognitionError::UnreadablePayload(detail));
        }
        if !status.is_success() {
            return Err(RecognitionError::Provider(format!("status {status}")));
        }

        let body: TranscribeResponse = response
            .json()
            .await
            .map_err(|e| RecognitionError::Provider(format!("invalid response body: {e}")))?;
        Ok(body.transcript)
    }
}

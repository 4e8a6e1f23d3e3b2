//! Transform failure types.

use std::time::Duration;

use thiserror::Error;

/// Errors that can occur while transforming text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// No API key is configured.
    #[error("LLM API key is not configured (set LLM_API_KEY or HUGGINGFACE_API_KEY)")]
    MissingApiKey,

    /// The call did not finish in time.
    #[error("LLM request timed out after {0:?}")]
    Timeout(Duration),

    /// Transport-level failure.
    #[error("LLM request failed: {0}")]
    Http(String),

    /// Provider answered with a non-success status.
    #[error("LLM returned status {status}: {message}")]
    Status { status: u16, message: String },

    /// Provider answered without usable content.
    #[error("Empty response from LLM")]
    EmptyResponse,

    /// Response body could not be decoded.
    #[error("Invalid LLM response: {0}")]
    InvalidResponse(String),

    /// Failure reported verbatim by the transform backend.
    #[error("{0}")]
    Service(String),
}

impl From<reqwest::Error> for TransformError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            TransformError::InvalidResponse(e.to_string())
        } else {
            TransformError::Http(e.to_string())
        }
    }
}

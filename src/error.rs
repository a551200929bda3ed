//! Error handling and custom error types
//!
//! Provides unified error handling across the crate using thiserror. Every
//! failure a pipeline can produce is classified here so the caller can show
//! a message and stay interactive.

use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Input rejected before any network call (empty prompt, missing key).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Non-2xx response from the Gemini API.
    #[error("API error (status {status}): {message}")]
    Api {
        status: reqwest::StatusCode,
        message: String,
    },

    /// The request exceeded the configured deadline.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Well-formed JSON that lacks the candidates/content/parts structure.
    #[error("Unexpected response format: {0}")]
    UnexpectedFormat(String),

    /// A recognizable envelope carrying neither text nor inline data.
    #[error("Empty response: no text or image parts returned")]
    EmptyResponse,

    /// Malformed base64 in an inline-data payload.
    #[error("Failed to decode image payload: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_message() {
        let err = Error::Validation("prompt is empty".to_string());
        assert_eq!(err.to_string(), "Validation error: prompt is empty");
    }

    #[test]
    fn test_api_error_carries_status() {
        let err = Error::Api {
            status: reqwest::StatusCode::TOO_MANY_REQUESTS,
            message: "quota exceeded".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("429"));
        assert!(msg.contains("quota exceeded"));
    }
}

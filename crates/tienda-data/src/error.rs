//! HTTP client error types.

use thiserror::Error;

/// Errors that can occur when talking to the Order API.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The request could not be sent or the response body not read.
    #[error("Request failed: {0}")]
    RequestError(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Non-2xx response.
    #[error("HTTP {status}: {message}")]
    HttpError { status: u16, message: String },

    /// Failed to parse response body.
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(String),
}

impl FetchError {
    /// HTTP status of the failed response, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::HttpError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::JsonError(e.to_string())
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_builder() {
            FetchError::InvalidUrl(e.to_string())
        } else if e.is_decode() {
            FetchError::ParseError(e.to_string())
        } else {
            FetchError::RequestError(e.to_string())
        }
    }
}

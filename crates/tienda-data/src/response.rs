//! HTTP response handling.

use crate::FetchError;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

/// A fully-read HTTP response.
#[derive(Debug, Clone)]
pub struct Response {
    /// The HTTP status code.
    pub status: u16,
    /// The response headers.
    pub headers: HashMap<String, String>,
    /// The response body.
    pub body: Vec<u8>,
}

impl Response {
    /// Create a new response.
    pub fn new(status: u16, headers: HashMap<String, String>, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Check if the response was successful (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get the response body as text.
    pub fn text(&self) -> Result<String, FetchError> {
        String::from_utf8(self.body.clone())
            .map_err(|e| FetchError::ParseError(format!("Invalid UTF-8: {}", e)))
    }

    /// Parse the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FetchError> {
        serde_json::from_slice(&self.body).map_err(|e| FetchError::ParseError(e.to_string()))
    }

    /// Get a header value (case-insensitive).
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// Standard reason phrase for the status, e.g. "Not Found".
    pub fn reason(&self) -> &'static str {
        reqwest::StatusCode::from_u16(self.status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("Unknown status")
    }

    /// Convert to a Result, returning an error for non-2xx status codes.
    pub fn error_for_status(self) -> Result<Self, FetchError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(FetchError::HttpError {
                status: self.status,
                message: self.reason().to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_response(status: u16, body: &[u8]) -> Response {
        Response::new(status, HashMap::new(), body.to_vec())
    }

    #[test]
    fn test_response_is_success() {
        assert!(make_response(200, b"").is_success());
        assert!(make_response(201, b"").is_success());
        assert!(make_response(299, b"").is_success());
        assert!(!make_response(199, b"").is_success());
        assert!(!make_response(300, b"").is_success());
        assert!(!make_response(500, b"").is_success());
    }

    #[test]
    fn test_response_text_invalid_utf8() {
        let resp = make_response(200, &[0xff, 0xfe]);
        assert!(resp.text().is_err());
    }

    #[test]
    fn test_response_json_invalid() {
        let resp = make_response(200, b"not json");
        let result: Result<serde_json::Value, _> = resp.json();
        assert!(matches!(result, Err(FetchError::ParseError(_))));
    }

    #[test]
    fn test_response_header_case_insensitive() {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        let resp = Response::new(200, headers, Vec::new());
        assert_eq!(resp.header("content-type"), Some("application/json"));
        assert_eq!(resp.header("X-Missing"), None);
    }

    #[test]
    fn test_response_error_for_status() {
        assert!(make_response(204, b"").error_for_status().is_ok());

        let err = make_response(404, b"").error_for_status().unwrap_err();
        assert_eq!(
            err,
            FetchError::HttpError {
                status: 404,
                message: "Not Found".to_string()
            }
        );
    }
}

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when using the Firecrawl API client
#[derive(Debug, Error)]
pub enum FirecrawlError {
    /// HTTP request error
    #[error("HTTP error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// API error returned by Firecrawl
    #[error("Firecrawl API error: {status} - {body}", status = .0.status_code.unwrap_or(0), body = .0.message)]
    Api(ApiErrorObject),

    /// Configuration error (e.g., missing credentials)
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(String),
}

/// API error object from Firecrawl
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorObject {
    /// HTTP status code
    #[serde(default)]
    pub status_code: Option<u16>,
    /// Human-readable error message (the raw response body when the
    /// server does not return structured JSON)
    #[serde(default)]
    pub message: String,
    /// Error type string
    #[serde(default)]
    pub error: Option<String>,
}

/// Maps a serde deserialization error to a `FirecrawlError` with context
#[must_use]
pub fn map_deser(e: &serde_json::Error, body: &[u8]) -> FirecrawlError {
    let snippet = String::from_utf8_lossy(&body[..body.len().min(400)]).to_string();
    FirecrawlError::Serde(format!("{e}: {snippet}"))
}

/// Deserializes an API error from the response body
///
/// Attempts to parse the error as JSON, falling back to plain text on failure.
#[must_use]
pub fn deserialize_api_error(status: StatusCode, body: &[u8]) -> FirecrawlError {
    let status_code = Some(status.as_u16());

    if let Ok(mut obj) = serde_json::from_slice::<ApiErrorObject>(body)
        && !obj.message.is_empty()
    {
        obj.status_code = status_code;
        return FirecrawlError::Api(obj);
    }

    // Server may return plain text on 5xx; cap body to avoid log/memory bloat
    FirecrawlError::Api(ApiErrorObject {
        status_code,
        message: String::from_utf8_lossy(&body[..body.len().min(400)]).into_owned(),
        error: Some(format!("http_{}", status.as_u16())),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_carries_status_and_body() {
        let err = deserialize_api_error(StatusCode::BAD_GATEWAY, b"upstream unavailable");
        match err {
            FirecrawlError::Api(obj) => {
                assert_eq!(obj.status_code, Some(502));
                assert_eq!(obj.message, "upstream unavailable");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn api_error_parses_structured_body() {
        let body = br#"{"message": "invalid url", "error": "bad_request"}"#;
        let err = deserialize_api_error(StatusCode::BAD_REQUEST, body);
        match err {
            FirecrawlError::Api(obj) => {
                assert_eq!(obj.status_code, Some(400));
                assert_eq!(obj.message, "invalid url");
                assert_eq!(obj.error.as_deref(), Some("bad_request"));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn display_includes_status_code() {
        let err = deserialize_api_error(StatusCode::TOO_MANY_REQUESTS, b"slow down");
        assert!(err.to_string().contains("429"));
        assert!(err.to_string().contains("slow down"));
    }
}

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when using the Groq API client
#[derive(Debug, Error)]
pub enum GroqError {
    /// HTTP request error
    #[error("HTTP error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// API error returned by Groq
    #[error("Groq API error: {status} - {body}", status = .0.status_code.unwrap_or(0), body = .0.message)]
    Api(ApiErrorObject),

    /// Configuration error (e.g., missing credentials)
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(String),

    /// Response contained no completion choices
    #[error("Empty response: no completion choices returned")]
    EmptyResponse,
}

/// API error object from Groq
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

/// Maps a serde deserialization error to a `GroqError` with context
#[must_use]
pub fn map_deser(e: &serde_json::Error, body: &[u8]) -> GroqError {
    let snippet = String::from_utf8_lossy(&body[..body.len().min(400)]).to_string();
    GroqError::Serde(format!("{e}: {snippet}"))
}

/// Deserializes an API error from the response body
///
/// Attempts to parse the error as JSON, falling back to plain text on failure.
#[must_use]
pub fn deserialize_api_error(status: StatusCode, body: &[u8]) -> GroqError {
    let status_code = Some(status.as_u16());

    if let Ok(mut obj) = serde_json::from_slice::<ApiErrorObject>(body)
        && !obj.message.is_empty()
    {
        obj.status_code = status_code;
        return GroqError::Api(obj);
    }

    // Server may return plain text on 5xx; cap body to avoid log/memory bloat
    GroqError::Api(ApiErrorObject {
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
        let err = deserialize_api_error(StatusCode::UNAUTHORIZED, b"bad token");
        match err {
            GroqError::Api(obj) => {
                assert_eq!(obj.status_code, Some(401));
                assert_eq!(obj.message, "bad token");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn display_includes_status_code() {
        let err = deserialize_api_error(StatusCode::SERVICE_UNAVAILABLE, b"overloaded");
        assert!(err.to_string().contains("503"));
        assert!(err.to_string().contains("overloaded"));
    }
}

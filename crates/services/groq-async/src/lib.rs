//! Async Groq API client with typed requests/responses and wiremock tests.
//!
//! Wraps the OpenAI-shaped `/chat/completions` endpoint with fixed sampling
//! parameters, plus `generate`/`summarize` convenience calls used by the
//! research server. Calls are single-shot; a non-success status surfaces as
//! [`GroqError::Api`] carrying the status code and response body.

/// HTTP client implementation
pub mod client;
/// Configuration types for the client
pub mod config;
/// Error types
pub mod error;
/// API resource implementations
pub mod resources;
/// Test support utilities (for use in tests)
#[doc(hidden)]
pub mod test_support;
/// Request and response types
pub mod types;

pub use crate::client::Client;
pub use crate::config::GroqConfig;
pub use crate::error::{ApiErrorObject, GroqError};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::types::*;
    pub use crate::{Client, GroqConfig};
}

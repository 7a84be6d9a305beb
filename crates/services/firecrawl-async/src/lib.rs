//! Async Firecrawl API client with typed requests/responses and wiremock tests.
//!
//! Covers the two endpoints the research server needs: `/scrape` and
//! `/search`. Calls are single-shot; a non-success status surfaces as
//! [`FirecrawlError::Api`] carrying the status code and response body.

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
pub use crate::config::FirecrawlConfig;
pub use crate::error::{ApiErrorObject, FirecrawlError};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::types::*;
    pub use crate::{Client, FirecrawlConfig};
}

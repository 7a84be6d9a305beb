//! Error type for research operations.

use thiserror::Error;

/// Error returned by orchestration and resource handlers.
///
/// Carries a structured kind internally; the external "Error ..." text
/// surface is produced only at the protocol boundary.
#[derive(Debug, Error)]
pub enum ResearchError {
    /// Failure from the Firecrawl scrape/search service
    #[error(transparent)]
    Firecrawl(#[from] firecrawl_async::FirecrawlError),

    /// Failure from the Groq completion service
    #[error(transparent)]
    Groq(#[from] groq_async::GroqError),

    /// Startup configuration error (missing credentials)
    #[error("configuration error: {0}")]
    Config(String),
}

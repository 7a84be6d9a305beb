//! Request and response types for the Firecrawl API

/// Scrape endpoint types
pub mod scrape;
/// Search endpoint types
pub mod search;

pub use scrape::{ScrapeMetadata, ScrapeRequest, ScrapeResponse};
pub use search::{SearchRequest, SearchResponse, SearchResult};

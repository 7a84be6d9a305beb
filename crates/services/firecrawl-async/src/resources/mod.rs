//! API resource implementations for the Firecrawl client

/// Scrape API resource
pub mod scrape;
/// Search API resource
pub mod search;

pub use scrape::Scrape;
pub use search::Search;

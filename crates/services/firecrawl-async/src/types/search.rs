use serde::{Deserialize, Serialize};

/// Request body for the `/search` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    /// Search query
    pub query: String,
    /// Maximum number of results to return
    pub limit: u32,
    /// Include a snippet with each result
    pub include_snippets: bool,
}

impl SearchRequest {
    /// Creates a search request for `query` with up to `limit` results.
    #[must_use]
    pub fn new(query: impl Into<String>, limit: u32) -> Self {
        Self {
            query: query.into(),
            limit,
            include_snippets: true,
        }
    }
}

/// Response from the `/search` endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    /// Results in rank order
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

/// A single search result.
///
/// All fields are optional on the wire; callers substitute defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResult {
    /// Result title
    #[serde(default)]
    pub title: Option<String>,
    /// Result URL
    #[serde(default)]
    pub url: Option<String>,
    /// Text snippet for the result
    #[serde(default)]
    pub snippet: Option<String>,
}

use serde::{Deserialize, Serialize};

/// Request body for the `/scrape` endpoint.
///
/// The extraction flags are always sent as `true`; the wire shape is fixed
/// and the serialized body must match it field for field.
#[derive(Debug, Clone, Serialize)]
pub struct ScrapeRequest {
    /// URL to scrape
    pub url: String,
    /// Render the page before extraction
    pub render: bool,
    /// Extract the rendered text body
    pub extract_text: bool,
    /// Extract discovered links
    pub extract_links: bool,
    /// Extract page metadata
    pub extract_metadata: bool,
}

impl ScrapeRequest {
    /// Creates a scrape request for `url` with full extraction enabled.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            render: true,
            extract_text: true,
            extract_links: true,
            extract_metadata: true,
        }
    }
}

/// Response from the `/scrape` endpoint.
///
/// Every field is default-substituted when absent; the upstream shape is
/// not validated beyond that.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScrapeResponse {
    /// Rendered text body of the page
    #[serde(default)]
    pub text: String,
    /// Extracted page metadata
    #[serde(default)]
    pub metadata: ScrapeMetadata,
    /// Links discovered on the page
    #[serde(default)]
    pub links: Vec<String>,
}

/// Metadata block of a scrape response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScrapeMetadata {
    /// Page title
    #[serde(default)]
    pub title: Option<String>,
    /// Page description
    #[serde(default)]
    pub description: Option<String>,
    /// Page author
    #[serde(default)]
    pub author: Option<String>,
    /// Publication date as reported by the page
    #[serde(default)]
    pub published_date: Option<String>,
}

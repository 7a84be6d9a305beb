//! Thin read-only resource handlers.
//!
//! Each lookup delegates to the Firecrawl client and formats the result as
//! plain text; error-to-text conversion happens at the protocol boundary.

use firecrawl_async::types::scrape::ScrapeRequest;
use firecrawl_async::types::search::SearchRequest;
use tracing::info;

use crate::WebResearch;
use crate::error::ResearchError;

/// Fetch the full text content of a URL.
///
/// # Errors
/// Returns `ResearchError` if the scrape call fails.
pub async fn website_content(tools: &WebResearch, url: &str) -> Result<String, ResearchError> {
    info!("Scraping website: {url}");

    let scraped = tools
        .firecrawl
        .scrape()
        .create(ScrapeRequest::new(url))
        .await?;

    if scraped.text.is_empty() {
        Ok("No content found".into())
    } else {
        Ok(scraped.text)
    }
}

/// Run a web search and format the results as a numbered list.
///
/// # Errors
/// Returns `ResearchError` if the search call fails.
pub async fn search_listing(
    tools: &WebResearch,
    query: &str,
    limit: u32,
) -> Result<String, ResearchError> {
    info!("Searching web for: {query} with limit {limit}");

    let resp = tools
        .firecrawl
        .search()
        .create(SearchRequest::new(query, limit))
        .await?;

    let mut formatted = Vec::new();
    for (i, result) in resp.results.iter().enumerate() {
        formatted.push(format!("Result {}:", i + 1));
        formatted.push(format!(
            "Title: {}",
            result.title.as_deref().unwrap_or("No title")
        ));
        formatted.push(format!(
            "URL: {}",
            result.url.as_deref().unwrap_or("No URL")
        ));
        formatted.push(format!(
            "Snippet: {}",
            result.snippet.as_deref().unwrap_or("No snippet")
        ));
        formatted.push(String::new());
    }

    Ok(formatted.join("\n"))
}

/// Fetch and format the metadata of a URL.
///
/// # Errors
/// Returns `ResearchError` if the scrape call fails.
pub async fn website_metadata(tools: &WebResearch, url: &str) -> Result<String, ResearchError> {
    info!("Getting metadata for website: {url}");

    let scraped = tools
        .firecrawl
        .scrape()
        .create(ScrapeRequest::new(url))
        .await?;
    let metadata = scraped.metadata;

    Ok([
        format!("Title: {}", metadata.title.as_deref().unwrap_or("No title")),
        format!(
            "Description: {}",
            metadata.description.as_deref().unwrap_or("No description")
        ),
        format!(
            "Author: {}",
            metadata.author.as_deref().unwrap_or("No author")
        ),
        format!(
            "Published: {}",
            metadata.published_date.as_deref().unwrap_or("No date")
        ),
    ]
    .join("\n"))
}

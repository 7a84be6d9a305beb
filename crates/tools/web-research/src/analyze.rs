//! Single-page website analysis.

use firecrawl_async::types::scrape::ScrapeRequest;
use tracing::info;

use crate::WebResearch;
use crate::error::ResearchError;
use crate::progress::Progress;
use crate::types::AnalyzeWebsiteInput;

/// Word budget for the optional page summary
const SUMMARY_MAX_WORDS: u32 = 500;

/// Analyze a website: scrape it, report its shape, optionally summarize it.
///
/// Steps, in order: scrape (progress 0/3 then 1/3), build the fixed-field
/// report, and when `include_summary` is set and the page has text, one
/// summarize call (progress 2/3 before, 3/3 at the end). The generation
/// client is never touched when the summary is skipped.
///
/// # Errors
/// Returns `ResearchError` if the scrape or the summarize call fails.
pub async fn analyze_website(
    tools: &WebResearch,
    input: AnalyzeWebsiteInput,
    progress: &dyn Progress,
) -> Result<String, ResearchError> {
    info!("Analyzing website: {}", input.url);

    progress.report(0, 3);
    let scraped = tools
        .firecrawl
        .scrape()
        .create(ScrapeRequest::new(&input.url))
        .await?;

    progress.report(1, 3);
    let mut analysis = vec![
        format!("Website Analysis: {}", input.url),
        format!(
            "Title: {}",
            scraped.metadata.title.as_deref().unwrap_or("No title")
        ),
        format!(
            "Description: {}",
            scraped
                .metadata
                .description
                .as_deref()
                .unwrap_or("No description")
        ),
        format!("Content Length: {} characters", scraped.text.chars().count()),
        format!("Links Found: {}", scraped.links.len()),
    ];

    if input.include_summary && !scraped.text.is_empty() {
        progress.report(2, 3);
        let summary = tools
            .groq
            .chat()
            .summarize(&scraped.text, SUMMARY_MAX_WORDS)
            .await?;
        analysis.push("\nSummary:".into());
        analysis.push(summary);
    }

    progress.report(3, 3);
    Ok(analysis.join("\n"))
}

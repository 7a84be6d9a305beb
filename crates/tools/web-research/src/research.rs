//! Multi-source topic research.

use firecrawl_async::types::scrape::ScrapeRequest;
use firecrawl_async::types::search::SearchRequest;
use tracing::{info, warn};

use crate::WebResearch;
use crate::error::ResearchError;
use crate::progress::Progress;
use crate::types::ResearchTopicInput;

/// Word budget for each per-source summary
const SOURCE_SUMMARY_MAX_WORDS: u32 = 300;

/// Research a topic by searching the web and analyzing the top results.
///
/// The per-source loop is intentionally sequential: the "Sources" section
/// must follow search-rank order, and progress reporting relies on each
/// source completing before the next begins. A failure on one source is
/// recorded as an inline error line and never aborts the remaining sources.
///
/// Empty outcomes ("no search results", "no gatherable data") are
/// informational results, not errors.
///
/// # Errors
/// Returns `ResearchError` if the initial search or the final synthesis
/// call fails.
pub async fn research_topic(
    tools: &WebResearch,
    input: ResearchTopicInput,
    progress: &dyn Progress,
) -> Result<String, ResearchError> {
    let ResearchTopicInput { topic, depth } = input;
    info!("Researching topic: {topic} with depth {depth}");

    // depth comes straight from caller input; u32::MAX must not overflow
    let total_steps = depth.saturating_add(1);

    progress.report(0, total_steps);
    let search = tools
        .firecrawl
        .search()
        .create(SearchRequest::new(&topic, depth))
        .await?;

    if search.results.is_empty() {
        return Ok(format!("No search results found for topic: {topic}"));
    }

    let mut research_data: Vec<String> = Vec::new();
    let mut sources_gathered = 0u32;

    for (i, result) in search.results.iter().enumerate() {
        let Some(url) = result.url.as_deref() else {
            continue;
        };

        info!("Analyzing result {}: {url}", i + 1);
        progress.report(i as u32 + 1, total_steps);

        match summarize_source(tools, url).await {
            Ok(Some(summary)) => {
                research_data.push(format!(
                    "Source {}: {}",
                    i + 1,
                    result.title.as_deref().unwrap_or("No title")
                ));
                research_data.push(format!("URL: {url}"));
                research_data.push(format!("Summary: {summary}"));
                research_data.push(String::new());
                sources_gathered += 1;
            }
            // Page had no text; nothing to record for this source
            Ok(None) => {}
            Err(e) => {
                warn!("source analysis failed for {url}: {e}");
                research_data.push(format!("Error analyzing {url}: {e}"));
            }
        }
    }

    if sources_gathered == 0 {
        return Ok(format!(
            "Could not gather meaningful research data on topic: {topic}"
        ));
    }

    let research_text = research_data.join("\n");
    let prompt = format!(
        "Based on the following research on '{topic}', provide a comprehensive analysis:\n\n{research_text}"
    );
    let final_analysis = tools.groq.chat().generate(prompt).await?;

    Ok(format!(
        "# Research on: {topic}\n\n{final_analysis}\n\n## Sources\n\n{research_text}"
    ))
}

/// Scrape one source and summarize its text.
///
/// Returns `Ok(None)` when the page has no text to summarize.
async fn summarize_source(
    tools: &WebResearch,
    url: &str,
) -> Result<Option<String>, ResearchError> {
    let scraped = tools
        .firecrawl
        .scrape()
        .create(ScrapeRequest::new(url))
        .await?;

    if scraped.text.is_empty() {
        return Ok(None);
    }

    let summary = tools
        .groq
        .chat()
        .summarize(&scraped.text, SOURCE_SUMMARY_MAX_WORDS)
        .await?;
    Ok(Some(summary))
}

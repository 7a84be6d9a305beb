//! Thin generation tools delegating to the Groq client.

use tracing::info;

use crate::WebResearch;
use crate::error::ResearchError;
use crate::types::{GenerateContentInput, SummarizeTextInput};

/// Generate text from a prompt.
///
/// # Errors
/// Returns `ResearchError` if the Groq call fails.
pub async fn generate_content(
    tools: &WebResearch,
    input: GenerateContentInput,
) -> Result<String, ResearchError> {
    info!(
        "Generating content with prompt: {}...",
        truncate_chars(&input.prompt, 50)
    );
    Ok(tools.groq.chat().generate(input.prompt).await?)
}

/// Summarize text content within a word budget.
///
/// # Errors
/// Returns `ResearchError` if the Groq call fails.
pub async fn summarize_text(
    tools: &WebResearch,
    input: SummarizeTextInput,
) -> Result<String, ResearchError> {
    info!(
        "Summarizing content of length {} with max length {}",
        input.content.chars().count(),
        input.max_length
    );
    Ok(tools
        .groq
        .chat()
        .summarize(&input.content, input.max_length)
        .await?)
}

/// Trim a string to `max` characters for log output.
fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

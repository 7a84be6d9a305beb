//! Input types for the research tools.

use schemars::JsonSchema;
use serde::Deserialize;

/// Input for the `generate_content` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GenerateContentInput {
    /// The prompt to generate from
    pub prompt: String,
}

/// Input for the `summarize_text` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SummarizeTextInput {
    /// The content to summarize
    pub content: String,
    /// Maximum summary length in words (default: 500)
    #[serde(default = "default_max_length")]
    pub max_length: u32,
}

/// Input for the `analyze_website` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AnalyzeWebsiteInput {
    /// The URL to analyze
    pub url: String,
    /// Whether to append an LLM summary of the page content (default: true)
    #[serde(default = "default_true")]
    pub include_summary: bool,
}

/// Input for the `research_topic` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ResearchTopicInput {
    /// The topic to research
    pub topic: String,
    /// Number of search results to analyze (default: 2)
    #[serde(default = "default_depth")]
    pub depth: u32,
}

fn default_max_length() -> u32 {
    500
}

fn default_true() -> bool {
    true
}

fn default_depth() -> u32 {
    2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summarize_input_defaults_max_length() {
        let input: SummarizeTextInput =
            serde_json::from_str(r#"{"content": "some text"}"#).unwrap();
        assert_eq!(input.max_length, 500);
    }

    #[test]
    fn analyze_input_defaults_include_summary() {
        let input: AnalyzeWebsiteInput =
            serde_json::from_str(r#"{"url": "https://example.com"}"#).unwrap();
        assert!(input.include_summary);
    }

    #[test]
    fn research_input_defaults_depth() {
        let input: ResearchTopicInput = serde_json::from_str(r#"{"topic": "rust"}"#).unwrap();
        assert_eq!(input.depth, 2);
    }
}

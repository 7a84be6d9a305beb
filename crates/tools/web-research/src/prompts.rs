//! Canned prompt templates.
//!
//! Kept protocol-free: the server layer maps [`PromptRole`] onto the MCP
//! message types.

/// Role of a templated prompt message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptRole {
    /// A user-authored message
    User,
    /// An assistant-authored message
    Assistant,
}

/// Instruction template for researching a topic.
#[must_use]
pub fn research_prompt(topic: &str) -> String {
    format!(
        "I need to research about {topic}. Please:\n\
         1. Search for relevant information\n\
         2. Analyze the key findings\n\
         3. Provide a comprehensive summary\n\
         4. Include citations to sources\n"
    )
}

/// Conversation template for analyzing a website.
#[must_use]
pub fn website_analysis_prompt(url: &str) -> Vec<(PromptRole, String)> {
    vec![
        (
            PromptRole::User,
            format!("Please analyze this website: {url}"),
        ),
        (
            PromptRole::User,
            "I'd like to understand its content, structure, and main points.".into(),
        ),
        (
            PromptRole::Assistant,
            "I'll analyze this website for you. Would you like me to include a summary of the content?".into(),
        ),
    ]
}

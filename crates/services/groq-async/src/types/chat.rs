use serde::{Deserialize, Serialize};

/// Sampling temperature sent with every completion request
pub const TEMPERATURE: f64 = 0.7;
/// Output token cap sent with every completion request
pub const MAX_TOKENS: u32 = 1024;

/// Request body for the `/chat/completions` endpoint.
///
/// Sampling parameters are fixed; the wire shape must match the upstream
/// contract field for field.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// Model identifier
    pub model: String,
    /// Conversation messages
    pub messages: Vec<ChatMessage>,
    /// Sampling temperature
    pub temperature: f64,
    /// Maximum output tokens
    pub max_tokens: u32,
}

impl ChatRequest {
    /// Creates a completion request with a single user-role message and
    /// the fixed sampling parameters.
    #[must_use]
    pub fn user(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: vec![ChatMessage {
                role: "user".into(),
                content: prompt.into(),
            }],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        }
    }
}

/// A single chat message.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ChatMessage {
    /// Message role (`user`, `assistant`, ...)
    #[serde(default)]
    pub role: String,
    /// Message text
    #[serde(default)]
    pub content: String,
}

/// Response from the `/chat/completions` endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatResponse {
    /// Completion choices; the first one carries the generated text
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

/// A single completion choice.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatChoice {
    /// The generated message
    #[serde(default)]
    pub message: ChatMessage,
}

impl ChatResponse {
    /// Returns the first choice's message content, if any.
    #[must_use]
    pub fn first_content(&self) -> Option<&str> {
        self.choices.first().map(|c| c.message.content.as_str())
    }
}

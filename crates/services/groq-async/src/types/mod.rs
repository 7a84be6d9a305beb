//! Request and response types for the Groq API

/// Chat-completions endpoint types
pub mod chat;

pub use chat::{ChatChoice, ChatMessage, ChatRequest, ChatResponse};

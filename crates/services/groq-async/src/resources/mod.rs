//! API resource implementations for the Groq client

/// Chat-completions API resource
pub mod chat;

pub use chat::Chat;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};

/// Default Groq API base URL
pub const GROQ_DEFAULT_BASE: &str = "https://api.groq.com/v1";
/// Default completion model
pub const GROQ_DEFAULT_MODEL: &str = "llama3-70b-8192";

/// Configuration for the Groq client
///
/// Debug output automatically redacts `api_key` via [`SecretString`].
#[derive(Clone, Debug)]
pub struct GroqConfig {
    api_base: String,
    api_key: Option<SecretString>,
    model: String,
}

impl Default for GroqConfig {
    fn default() -> Self {
        let api_key = std::env::var("GROQ_API_KEY")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(SecretString::from);

        let api_base = std::env::var("GROQ_BASE_URL")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| GROQ_DEFAULT_BASE.into());

        let model = std::env::var("GROQ_MODEL")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| GROQ_DEFAULT_MODEL.into());

        Self {
            api_base,
            api_key,
            model,
        }
    }
}

impl GroqConfig {
    /// Creates a new configuration with default settings
    ///
    /// Attempts to read from environment variables:
    /// - `GROQ_API_KEY` for bearer token authentication
    /// - `GROQ_BASE_URL` for custom API base URL (defaults to `https://api.groq.com/v1`)
    /// - `GROQ_MODEL` for the completion model (defaults to `llama3-70b-8192`)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URL
    #[must_use]
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    /// Sets the API key
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(key.into()));
        self
    }

    /// Sets the completion model
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Returns the configured API base URL
    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }
}

/// Configuration trait for the Groq client
///
/// Implement this trait to provide custom authentication and API configuration.
pub trait Config: Send + Sync {
    /// Returns HTTP headers to include in requests
    ///
    /// # Errors
    ///
    /// Returns an error if header values contain invalid characters.
    fn headers(&self) -> Result<HeaderMap, crate::error::GroqError>;

    /// Constructs the full URL for an API endpoint
    fn url(&self, path: &str) -> String;

    /// Returns the completion model identifier
    fn model(&self) -> &str;

    /// Validates that authentication credentials are present.
    ///
    /// # Errors
    ///
    /// Returns an error if authentication is not properly configured.
    fn validate_auth(&self) -> Result<(), crate::error::GroqError>;
}

impl Config for GroqConfig {
    fn headers(&self) -> Result<HeaderMap, crate::error::GroqError> {
        use crate::error::GroqError;

        let mut h = HeaderMap::new();
        h.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(secret) = &self.api_key {
            let key = secret.expose_secret().trim();
            if !key.is_empty() {
                h.insert(
                    AUTHORIZATION,
                    HeaderValue::from_str(&format!("Bearer {key}"))
                        .map_err(|_| GroqError::Config("Invalid API key value".into()))?,
                );
            }
        }

        Ok(h)
    }

    fn url(&self, path: &str) -> String {
        let base = self.api_base.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn validate_auth(&self) -> Result<(), crate::error::GroqError> {
        match &self.api_key {
            Some(secret) if !secret.expose_secret().trim().is_empty() => Ok(()),
            _ => Err(crate::error::GroqError::Config(
                "Missing Groq credentials: set GROQ_API_KEY environment variable".into(),
            )),
        }
    }
}

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};

/// Default Firecrawl API base URL
pub const FIRECRAWL_DEFAULT_BASE: &str = "https://api.firecrawl.com/v1";

/// Configuration for the Firecrawl client
///
/// Debug output automatically redacts `api_key` via [`SecretString`].
#[derive(Clone, Debug)]
pub struct FirecrawlConfig {
    api_base: String,
    api_key: Option<SecretString>,
}

impl Default for FirecrawlConfig {
    fn default() -> Self {
        let api_key = std::env::var("FIRECRAWL_API_KEY")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(SecretString::from);

        let api_base = std::env::var("FIRECRAWL_BASE_URL")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| FIRECRAWL_DEFAULT_BASE.into());

        Self { api_base, api_key }
    }
}

impl FirecrawlConfig {
    /// Creates a new configuration with default settings
    ///
    /// Attempts to read from environment variables:
    /// - `FIRECRAWL_API_KEY` for bearer token authentication
    /// - `FIRECRAWL_BASE_URL` for custom API base URL (defaults to `https://api.firecrawl.com/v1`)
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

    /// Returns the configured API base URL
    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }
}

/// Configuration trait for the Firecrawl client
///
/// Implement this trait to provide custom authentication and API configuration.
pub trait Config: Send + Sync {
    /// Returns HTTP headers to include in requests
    ///
    /// # Errors
    ///
    /// Returns an error if header values contain invalid characters.
    fn headers(&self) -> Result<HeaderMap, crate::error::FirecrawlError>;

    /// Constructs the full URL for an API endpoint
    fn url(&self, path: &str) -> String;

    /// Validates that authentication credentials are present.
    ///
    /// # Errors
    ///
    /// Returns an error if authentication is not properly configured.
    fn validate_auth(&self) -> Result<(), crate::error::FirecrawlError>;
}

impl Config for FirecrawlConfig {
    fn headers(&self) -> Result<HeaderMap, crate::error::FirecrawlError> {
        use crate::error::FirecrawlError;

        let mut h = HeaderMap::new();
        h.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(secret) = &self.api_key {
            let key = secret.expose_secret().trim();
            if !key.is_empty() {
                h.insert(
                    AUTHORIZATION,
                    HeaderValue::from_str(&format!("Bearer {key}"))
                        .map_err(|_| FirecrawlError::Config("Invalid API key value".into()))?,
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

    fn validate_auth(&self) -> Result<(), crate::error::FirecrawlError> {
        match &self.api_key {
            Some(secret) if !secret.expose_secret().trim().is_empty() => Ok(()),
            _ => Err(crate::error::FirecrawlError::Config(
                "Missing Firecrawl credentials: set FIRECRAWL_API_KEY environment variable".into(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::EnvGuard;
    use serial_test::serial;

    #[test]
    #[serial(env)]
    fn config_reads_env_vars() {
        let _key = EnvGuard::set("FIRECRAWL_API_KEY", "test-key-123");
        let _base = EnvGuard::set("FIRECRAWL_BASE_URL", "https://custom.firecrawl.dev/v1");

        let cfg = FirecrawlConfig::new();
        assert_eq!(cfg.api_base(), "https://custom.firecrawl.dev/v1");

        let h = cfg.headers().unwrap();
        assert_eq!(
            h.get(AUTHORIZATION).unwrap().to_str().unwrap(),
            "Bearer test-key-123"
        );
    }

    #[test]
    #[serial(env)]
    fn config_defaults_base_url() {
        let _key = EnvGuard::set("FIRECRAWL_API_KEY", "k");
        let _base = EnvGuard::remove("FIRECRAWL_BASE_URL");

        let cfg = FirecrawlConfig::new();
        assert_eq!(cfg.api_base(), FIRECRAWL_DEFAULT_BASE);
    }

    #[test]
    #[serial(env)]
    fn validate_auth_missing_key() {
        let _key = EnvGuard::remove("FIRECRAWL_API_KEY");

        let cfg = FirecrawlConfig::new();
        assert!(cfg.validate_auth().is_err());
    }

    #[test]
    fn builder_methods() {
        let cfg = FirecrawlConfig::new()
            .with_api_base("https://test.firecrawl.dev")
            .with_api_key("my-key");

        assert_eq!(cfg.api_base(), "https://test.firecrawl.dev");
        assert!(cfg.validate_auth().is_ok());

        let h = cfg.headers().unwrap();
        assert_eq!(
            h.get(AUTHORIZATION).unwrap().to_str().unwrap(),
            "Bearer my-key"
        );
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let cfg = FirecrawlConfig::new().with_api_key("super-secret-key-12345");
        let debug_str = format!("{cfg:?}");

        assert!(
            !debug_str.contains("super-secret-key-12345"),
            "Debug output should not contain the API key"
        );
    }

    #[test]
    fn validate_auth_rejects_empty_or_whitespace() {
        let cfg = FirecrawlConfig::new().with_api_key("");
        assert!(cfg.validate_auth().is_err());

        let cfg = FirecrawlConfig::new().with_api_key("   ");
        assert!(cfg.validate_auth().is_err());

        let cfg = FirecrawlConfig::new().with_api_key("  valid-key  ");
        assert!(cfg.validate_auth().is_ok());
    }

    #[test]
    fn url_joins_without_double_slash() {
        let cfg = FirecrawlConfig::new().with_api_base("https://api.firecrawl.com/v1/");
        assert_eq!(cfg.url("/scrape"), "https://api.firecrawl.com/v1/scrape");
        assert_eq!(cfg.url("search"), "https://api.firecrawl.com/v1/search");
    }
}

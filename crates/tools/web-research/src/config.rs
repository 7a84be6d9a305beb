//! Application-level configuration.

use std::time::Duration;

use firecrawl_async::FirecrawlConfig;
use firecrawl_async::config::Config as _;
use groq_async::GroqConfig;
use groq_async::config::Config as _;

use crate::error::ResearchError;

/// Default number of search results when none is requested
pub const DEFAULT_SEARCH_LIMIT: u32 = 5;
/// Default per-request timeout for upstream calls
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Immutable application configuration.
///
/// Populated once from the environment at startup; missing credentials are a
/// fatal startup condition, never a runtime error.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Firecrawl client configuration (`FIRECRAWL_API_KEY`, `FIRECRAWL_BASE_URL`)
    pub firecrawl: FirecrawlConfig,
    /// Groq client configuration (`GROQ_API_KEY`, `GROQ_BASE_URL`, `GROQ_MODEL`)
    pub groq: GroqConfig,
    /// Search result limit used when a caller does not supply one
    pub default_search_limit: u32,
    /// Per-request timeout applied to every upstream call
    pub request_timeout: Duration,
}

impl AppConfig {
    /// Build the configuration from environment variables and validate that
    /// both API keys are present.
    ///
    /// # Errors
    ///
    /// Returns [`ResearchError::Config`] when `GROQ_API_KEY` or
    /// `FIRECRAWL_API_KEY` is missing or empty.
    pub fn from_env() -> Result<Self, ResearchError> {
        let firecrawl = FirecrawlConfig::new();
        let groq = GroqConfig::new();

        firecrawl
            .validate_auth()
            .map_err(|e| ResearchError::Config(e.to_string()))?;
        groq.validate_auth()
            .map_err(|e| ResearchError::Config(e.to_string()))?;

        Ok(Self {
            firecrawl,
            groq,
            default_search_limit: DEFAULT_SEARCH_LIMIT,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use firecrawl_async::test_support::EnvGuard;
    use serial_test::serial;

    #[test]
    #[serial(env)]
    fn from_env_fails_without_firecrawl_key() {
        let _g1 = EnvGuard::set("GROQ_API_KEY", "gq");
        let _g2 = EnvGuard::remove("FIRECRAWL_API_KEY");

        let err = AppConfig::from_env().unwrap_err();
        assert!(matches!(err, ResearchError::Config(_)));
        assert!(err.to_string().contains("FIRECRAWL_API_KEY"));
    }

    #[test]
    #[serial(env)]
    fn from_env_fails_without_groq_key() {
        let _g1 = EnvGuard::remove("GROQ_API_KEY");
        let _g2 = EnvGuard::set("FIRECRAWL_API_KEY", "fc");

        let err = AppConfig::from_env().unwrap_err();
        assert!(matches!(err, ResearchError::Config(_)));
        assert!(err.to_string().contains("GROQ_API_KEY"));
    }

    #[test]
    #[serial(env)]
    fn from_env_succeeds_with_both_keys() {
        let _g1 = EnvGuard::set("GROQ_API_KEY", "gq");
        let _g2 = EnvGuard::set("FIRECRAWL_API_KEY", "fc");

        let cfg = AppConfig::from_env().unwrap();
        assert_eq!(cfg.default_search_limit, DEFAULT_SEARCH_LIMIT);
        assert_eq!(cfg.request_timeout, DEFAULT_REQUEST_TIMEOUT);
    }
}

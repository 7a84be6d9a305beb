//! Web research orchestration over the Firecrawl and Groq clients.
//!
//! The building blocks here are deliberately sequential: every workflow awaits
//! each upstream call to completion before the next, and `research_topic`'s
//! per-source loop preserves search-rank order in its output.

pub mod analyze;
pub mod config;
pub mod error;
pub mod generate;
pub mod progress;
pub mod prompts;
pub mod research;
pub mod resources;
pub mod types;

pub use analyze::analyze_website;
pub use config::AppConfig;
pub use error::ResearchError;
pub use generate::{generate_content, summarize_text};
pub use progress::{LogProgress, Progress};
pub use research::research_topic;

/// Shared state for the research server.
///
/// Owns the application configuration and one instance of each service
/// client. Constructed once at process start and shared read-only by every
/// request; nothing here is mutated after construction.
pub struct WebResearch {
    pub(crate) config: AppConfig,
    /// Firecrawl scrape/search client
    pub(crate) firecrawl: firecrawl_async::Client<firecrawl_async::FirecrawlConfig>,
    /// Groq completion client
    pub(crate) groq: groq_async::Client<groq_async::GroqConfig>,
}

impl WebResearch {
    /// Create the shared state from an [`AppConfig`].
    ///
    /// Both clients share one HTTP connector configured with the
    /// application-level request timeout.
    ///
    /// # Panics
    /// Panics if the reqwest HTTP client cannot be built.
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        let http = reqwest::Client::builder()
            .connect_timeout(std::time::Duration::from_secs(5))
            .timeout(config.request_timeout)
            .build()
            .expect("reqwest client");

        let firecrawl = firecrawl_async::Client::with_config(config.firecrawl.clone())
            .with_http_client(http.clone());
        let groq = groq_async::Client::with_config(config.groq.clone()).with_http_client(http);

        Self {
            config,
            firecrawl,
            groq,
        }
    }

    /// Returns the configured default search result limit.
    #[must_use]
    pub fn default_search_limit(&self) -> u32 {
        self.config.default_search_limit
    }
}

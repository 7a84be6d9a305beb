use serde::{Serialize, de::DeserializeOwned};

use crate::{config::Config, error::FirecrawlError};

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

/// Firecrawl API client
///
/// The client is generic over a [`Config`] implementation that provides authentication
/// and API configuration. Every call is a single request/response exchange; failed
/// calls are not retried.
#[derive(Debug, Clone)]
pub struct Client<C: Config> {
    http: reqwest::Client,
    config: C,
}

impl Client<crate::config::FirecrawlConfig> {
    /// Creates a new client with default configuration
    ///
    /// Uses environment variables for authentication:
    /// - `FIRECRAWL_API_KEY` for bearer token authentication
    /// - `FIRECRAWL_BASE_URL` for custom API base URL
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(crate::config::FirecrawlConfig::new())
    }
}

impl<C: Config + Default> Default for Client<C> {
    fn default() -> Self {
        Self::with_config(C::default())
    }
}

impl<C: Config> Client<C> {
    /// Creates a new client with the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the reqwest client cannot be built.
    #[must_use]
    pub fn with_config(config: C) -> Self {
        Self {
            http: reqwest::Client::builder()
                .connect_timeout(std::time::Duration::from_secs(5))
                .timeout(DEFAULT_TIMEOUT)
                .build()
                .expect("reqwest client"),
            config,
        }
    }

    /// Replaces the HTTP client with a custom one
    ///
    /// Useful for setting custom timeouts, proxies, or other HTTP configuration.
    #[must_use]
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// Returns a reference to the client's configuration
    #[must_use]
    pub const fn config(&self) -> &C {
        &self.config
    }

    pub(crate) async fn post<I, O>(&self, path: &str, body: I) -> Result<O, FirecrawlError>
    where
        I: Serialize + Send + Sync,
        O: DeserializeOwned,
    {
        // Validate auth before any request
        self.config.validate_auth()?;

        let headers = self.config.headers()?;
        let request = self
            .http
            .post(self.config.url(path))
            .headers(headers)
            .json(&body)
            .build()?;

        let bytes = self.execute_raw(request).await?;
        let resp: O =
            serde_json::from_slice(&bytes).map_err(|e| crate::error::map_deser(&e, &bytes))?;
        Ok(resp)
    }

    async fn execute_raw(&self, request: reqwest::Request) -> Result<bytes::Bytes, FirecrawlError> {
        let response = self
            .http
            .execute(request)
            .await
            .map_err(FirecrawlError::Reqwest)?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(FirecrawlError::Reqwest)?;

        if status.is_success() {
            return Ok(bytes);
        }

        Err(crate::error::deserialize_api_error(status, &bytes))
    }
}

use crate::{
    client::Client,
    config::Config,
    error::FirecrawlError,
    types::scrape::{ScrapeRequest, ScrapeResponse},
};

/// API resource for the `/scrape` endpoint
pub struct Scrape<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> Scrape<'c, C> {
    /// Creates a new Scrape resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Scrape a URL with rendered text, link, and metadata extraction
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns a
    /// non-success status.
    pub async fn create(&self, req: ScrapeRequest) -> Result<ScrapeResponse, FirecrawlError> {
        self.client.post("/scrape", req).await
    }
}

// Add accessor to client
impl<C: Config> crate::Client<C> {
    /// Returns the Scrape API resource
    #[must_use]
    pub const fn scrape(&self) -> Scrape<'_, C> {
        Scrape::new(self)
    }
}

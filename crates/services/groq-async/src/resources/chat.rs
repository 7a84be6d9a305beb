use crate::{
    client::Client,
    config::Config,
    error::GroqError,
    types::chat::{ChatRequest, ChatResponse},
};

/// API resource for the `/chat/completions` endpoint
pub struct Chat<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> Chat<'c, C> {
    /// Creates a new Chat resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Execute a completion request
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns a
    /// non-success status.
    pub async fn create(&self, req: ChatRequest) -> Result<ChatResponse, GroqError> {
        self.client.post("/chat/completions", req).await
    }

    /// Generate text from a prompt using the configured model.
    ///
    /// Sends one single-user-message completion request with the fixed
    /// sampling parameters and returns the first choice's content.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API returns a non-success
    /// status, or the response contains no choices.
    pub async fn generate(&self, prompt: impl Into<String> + Send) -> Result<String, GroqError> {
        let req = ChatRequest::user(self.client.config().model(), prompt);
        let resp = self.create(req).await?;
        resp.first_content()
            .map(ToOwned::to_owned)
            .ok_or(GroqError::EmptyResponse)
    }

    /// Summarize `content` in at most `max_length` words.
    ///
    /// Builds the fixed summarization prompt and delegates to [`Self::generate`].
    /// The entire content is embedded in one prompt; no chunking or token
    /// budgeting is applied.
    ///
    /// # Errors
    ///
    /// Same failure contract as [`Self::generate`].
    pub async fn summarize(&self, content: &str, max_length: u32) -> Result<String, GroqError> {
        let prompt = format!(
            "Please summarize the following content in a concise way, \
             maximum {max_length} words:\n\n{content}"
        );
        self.generate(prompt).await
    }
}

// Add accessor to client
impl<C: Config> crate::Client<C> {
    /// Returns the Chat API resource
    #[must_use]
    pub const fn chat(&self) -> Chat<'_, C> {
        Chat::new(self)
    }
}

//! MCP server handler backed by the shared `WebResearch` state.

use std::sync::Arc;

use rmcp::model as m;
use rmcp::service::RequestContext;
use rmcp::{RoleServer, ServerHandler};
use schemars::JsonSchema;
use web_research::types::{
    AnalyzeWebsiteInput, GenerateContentInput, ResearchTopicInput, SummarizeTextInput,
};
use web_research::{LogProgress, WebResearch};

/// MCP server handler for the research tools, resources, and prompts.
///
/// Handlers always answer with text content: upstream failures are folded
/// into "Error ..."-prefixed strings rather than surfaced as protocol
/// faults. Only malformed requests (unknown tool, invalid arguments,
/// unknown resource scheme) become protocol errors.
pub struct ResearchServer {
    tools: Arc<WebResearch>,
    name: String,
    version: String,
}

/// A parsed resource URI.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ResourceRequest {
    /// `website://{url}` - full text content of a page
    Website(String),
    /// `search://{query}/{limit}` - formatted search listing
    Search { query: String, limit: u32 },
    /// `metadata://{url}` - formatted page metadata
    Metadata(String),
}

/// Parse one of the three supported resource URI shapes.
///
/// The trailing `/{limit}` segment of a search URI falls back to
/// `default_limit` when missing or not an integer.
fn parse_resource_uri(uri: &str, default_limit: u32) -> Option<ResourceRequest> {
    if let Some(url) = uri.strip_prefix("website://") {
        return Some(ResourceRequest::Website(url.to_string()));
    }
    if let Some(rest) = uri.strip_prefix("search://") {
        let (query, limit) = match rest.rsplit_once('/') {
            Some((query, limit)) => (query, limit.parse().ok()),
            None => (rest, None),
        };
        return Some(ResourceRequest::Search {
            query: query.to_string(),
            limit: limit.unwrap_or(default_limit),
        });
    }
    if let Some(url) = uri.strip_prefix("metadata://") {
        return Some(ResourceRequest::Metadata(url.to_string()));
    }
    None
}

fn tool_entry<T: JsonSchema>(name: &str, description: &str) -> m::Tool {
    let schema_json = serde_json::to_value(schemars::schema_for!(T))
        .unwrap_or(serde_json::json!({"type": "object"}));

    m::Tool {
        name: name.to_string().into(),
        title: name.to_string().into(),
        description: Some(description.to_string().into()),
        input_schema: Arc::new(schema_json.as_object().cloned().unwrap_or_default()),
        annotations: None,
        output_schema: None,
        icons: None,
        meta: None,
    }
}

fn parse_args<T: serde::de::DeserializeOwned>(args: serde_json::Value) -> Result<T, m::ErrorData> {
    serde_json::from_value(args)
        .map_err(|e| m::ErrorData::invalid_params(format!("Invalid arguments: {e}"), None))
}

fn text_result(text: String) -> m::CallToolResult {
    m::CallToolResult {
        content: vec![m::Content::text(text)],
        structured_content: None,
        is_error: Some(false),
        meta: None,
    }
}

impl ResearchServer {
    /// Create a new server over the shared research state.
    pub fn new(tools: Arc<WebResearch>) -> Self {
        Self {
            tools,
            name: "research-mcp".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Set the server name and version.
    #[must_use]
    pub fn with_info(mut self, name: &str, version: &str) -> Self {
        self.name = name.to_string();
        self.version = version.to_string();
        self
    }

    /// Run one tool, folding handler failures into "Error ..." text.
    async fn dispatch_tool(
        &self,
        name: &str,
        args: serde_json::Value,
    ) -> Result<String, m::ErrorData> {
        match name {
            "generate_content" => {
                let input: GenerateContentInput = parse_args(args)?;
                Ok(
                    match web_research::generate_content(&self.tools, input).await {
                        Ok(text) => text,
                        Err(e) => format!("Error generating content: {e}"),
                    },
                )
            }
            "summarize_text" => {
                let input: SummarizeTextInput = parse_args(args)?;
                Ok(match web_research::summarize_text(&self.tools, input).await {
                    Ok(text) => text,
                    Err(e) => format!("Error summarizing content: {e}"),
                })
            }
            "analyze_website" => {
                let input: AnalyzeWebsiteInput = parse_args(args)?;
                Ok(
                    match web_research::analyze_website(&self.tools, input, &LogProgress).await {
                        Ok(text) => text,
                        Err(e) => format!("Error analyzing website: {e}"),
                    },
                )
            }
            "research_topic" => {
                let input: ResearchTopicInput = parse_args(args)?;
                Ok(
                    match web_research::research_topic(&self.tools, input, &LogProgress).await {
                        Ok(text) => text,
                        Err(e) => format!("Error researching topic: {e}"),
                    },
                )
            }
            other => Err(m::ErrorData::invalid_request(
                format!("Unknown tool '{other}'"),
                None,
            )),
        }
    }

    /// Serve one resource read, folding handler failures into "Error ..." text.
    async fn dispatch_resource(&self, request: ResourceRequest) -> String {
        match request {
            ResourceRequest::Website(url) => {
                match web_research::resources::website_content(&self.tools, &url).await {
                    Ok(text) => text,
                    Err(e) => format!("Error scraping website: {e}"),
                }
            }
            ResourceRequest::Search { query, limit } => {
                match web_research::resources::search_listing(&self.tools, &query, limit).await {
                    Ok(text) => text,
                    Err(e) => format!("Error searching web: {e}"),
                }
            }
            ResourceRequest::Metadata(url) => {
                match web_research::resources::website_metadata(&self.tools, &url).await {
                    Ok(text) => text,
                    Err(e) => format!("Error getting metadata: {e}"),
                }
            }
        }
    }

    fn resource_templates() -> Vec<m::ResourceTemplate> {
        // Deserialized from the wire shape so the list survives model-struct
        // field churn across rmcp releases.
        serde_json::from_value(serde_json::json!([
            {
                "uriTemplate": "website://{url}",
                "name": "website",
                "description": "Get content from a website URL",
                "mimeType": "text/plain"
            },
            {
                "uriTemplate": "search://{query}/{limit}",
                "name": "search",
                "description": "Search the web for information",
                "mimeType": "text/plain"
            },
            {
                "uriTemplate": "metadata://{url}",
                "name": "metadata",
                "description": "Get metadata from a website URL",
                "mimeType": "text/plain"
            }
        ]))
        .unwrap_or_default()
    }

    /// Build the response for one named prompt from its raw arguments.
    fn prompt_result(
        name: &str,
        arguments: Option<&serde_json::Map<String, serde_json::Value>>,
    ) -> Result<m::GetPromptResult, m::ErrorData> {
        let arg = |key: &str| -> Result<String, m::ErrorData> {
            arguments
                .and_then(|a| a.get(key))
                .and_then(|v| v.as_str())
                .map(ToString::to_string)
                .ok_or_else(|| {
                    m::ErrorData::invalid_params(format!("Missing required argument '{key}'"), None)
                })
        };

        match name {
            "research_prompt" => {
                let topic = arg("topic")?;
                Ok(m::GetPromptResult {
                    description: Some("Instruction template for researching a topic".into()),
                    messages: vec![m::PromptMessage::new_text(
                        m::PromptMessageRole::User,
                        web_research::prompts::research_prompt(&topic),
                    )],
                })
            }
            "website_analysis_prompt" => {
                let url = arg("url")?;
                let messages = web_research::prompts::website_analysis_prompt(&url)
                    .into_iter()
                    .map(|(role, text)| {
                        let role = match role {
                            web_research::prompts::PromptRole::User => m::PromptMessageRole::User,
                            web_research::prompts::PromptRole::Assistant => {
                                m::PromptMessageRole::Assistant
                            }
                        };
                        m::PromptMessage::new_text(role, text)
                    })
                    .collect();
                Ok(m::GetPromptResult {
                    description: Some("Conversation template for analyzing a website".into()),
                    messages,
                })
            }
            other => Err(m::ErrorData::invalid_request(
                format!("Unknown prompt '{other}'"),
                None,
            )),
        }
    }

    fn prompt_list() -> Vec<m::Prompt> {
        vec![
            m::Prompt::new(
                "research_prompt",
                Some("Instruction template for researching a topic"),
                Some(vec![m::PromptArgument {
                    name: "topic".to_string(),
                    title: None,
                    description: Some("The topic to research".to_string()),
                    required: Some(true),
                }]),
            ),
            m::Prompt::new(
                "website_analysis_prompt",
                Some("Conversation template for analyzing a website"),
                Some(vec![m::PromptArgument {
                    name: "url".to_string(),
                    title: None,
                    description: Some("The website URL to analyze".to_string()),
                    required: Some(true),
                }]),
            ),
        ]
    }
}

// Allow manual_async_fn because the trait signature uses `impl Future` return types
#[allow(clippy::manual_async_fn)]
impl ServerHandler for ResearchServer {
    fn initialize(
        &self,
        _params: m::InitializeRequestParam,
        _ctx: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<m::InitializeResult, m::ErrorData>> + Send + '_
    {
        async move {
            Ok(m::InitializeResult {
                server_info: m::Implementation {
                    name: self.name.clone(),
                    title: self.name.clone().into(),
                    version: self.version.clone(),
                    website_url: None,
                    icons: None,
                },
                capabilities: m::ServerCapabilities::builder()
                    .enable_tools()
                    .enable_resources()
                    .enable_prompts()
                    .build(),
                ..Default::default()
            })
        }
    }

    fn list_tools(
        &self,
        _req: Option<m::PaginatedRequestParam>,
        _ctx: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<m::ListToolsResult, m::ErrorData>> + Send + '_
    {
        async move {
            let tools = vec![
                tool_entry::<GenerateContentInput>(
                    "generate_content",
                    "Generate content using Groq LLM",
                ),
                tool_entry::<SummarizeTextInput>(
                    "summarize_text",
                    "Summarize text content using Groq LLM",
                ),
                tool_entry::<AnalyzeWebsiteInput>(
                    "analyze_website",
                    "Analyze a website and optionally summarize its content",
                ),
                tool_entry::<ResearchTopicInput>(
                    "research_topic",
                    "Research a topic by searching the web and analyzing top results",
                ),
            ];
            Ok(m::ListToolsResult {
                tools,
                next_cursor: None,
                meta: None,
            })
        }
    }

    fn call_tool(
        &self,
        req: m::CallToolRequestParam,
        _ctx: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<m::CallToolResult, m::ErrorData>> + Send + '_
    {
        async move {
            let args = serde_json::Value::Object(req.arguments.unwrap_or_default());
            let text = self.dispatch_tool(&req.name, args).await?;
            Ok(text_result(text))
        }
    }

    fn list_resources(
        &self,
        _req: Option<m::PaginatedRequestParam>,
        _ctx: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<m::ListResourcesResult, m::ErrorData>> + Send + '_
    {
        async {
            Ok(m::ListResourcesResult {
                resources: vec![],
                next_cursor: None,
                meta: None,
            })
        }
    }

    fn list_resource_templates(
        &self,
        _req: Option<m::PaginatedRequestParam>,
        _ctx: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<m::ListResourceTemplatesResult, m::ErrorData>>
    + Send
    + '_ {
        async {
            Ok(m::ListResourceTemplatesResult {
                resource_templates: Self::resource_templates(),
                next_cursor: None,
                meta: None,
            })
        }
    }

    fn read_resource(
        &self,
        req: m::ReadResourceRequestParam,
        _ctx: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<m::ReadResourceResult, m::ErrorData>> + Send + '_
    {
        async move {
            let uri = req.uri.to_string();
            let Some(request) = parse_resource_uri(&uri, self.tools.default_search_limit()) else {
                return Err(m::ErrorData::invalid_request(
                    format!("Unsupported resource URI: {uri}"),
                    None,
                ));
            };

            let text = self.dispatch_resource(request).await;
            Ok(m::ReadResourceResult {
                contents: vec![m::ResourceContents::text(text, uri)],
            })
        }
    }

    fn list_prompts(
        &self,
        _req: Option<m::PaginatedRequestParam>,
        _ctx: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<m::ListPromptsResult, m::ErrorData>> + Send + '_
    {
        async {
            Ok(m::ListPromptsResult {
                prompts: Self::prompt_list(),
                next_cursor: None,
                meta: None,
            })
        }
    }

    fn get_prompt(
        &self,
        req: m::GetPromptRequestParam,
        _ctx: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<m::GetPromptResult, m::ErrorData>> + Send + '_
    {
        async move { Self::prompt_result(req.name.as_ref(), req.arguments.as_ref()) }
    }

    fn ping(
        &self,
        _ctx: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<(), m::ErrorData>> + Send + '_ {
        async { Ok(()) }
    }

    fn set_level(
        &self,
        _req: m::SetLevelRequestParam,
        _ctx: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<(), m::ErrorData>> + Send + '_ {
        async { Ok(()) }
    }

    fn complete(
        &self,
        _req: m::CompleteRequestParam,
        _ctx: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<m::CompleteResult, m::ErrorData>> + Send + '_
    {
        async {
            Err(m::ErrorData::invalid_request(
                "Method not implemented",
                None,
            ))
        }
    }

    fn subscribe(
        &self,
        _req: m::SubscribeRequestParam,
        _ctx: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<(), m::ErrorData>> + Send + '_ {
        async {
            Err(m::ErrorData::invalid_request(
                "Method not implemented",
                None,
            ))
        }
    }

    fn unsubscribe(
        &self,
        _req: m::UnsubscribeRequestParam,
        _ctx: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<(), m::ErrorData>> + Send + '_ {
        async {
            Err(m::ErrorData::invalid_request(
                "Method not implemented",
                None,
            ))
        }
    }
}

//! MCP stdio server for web research.
//!
//! Exposes the scraping resources, research tools, and prompt templates
//! from the `web-research` crate over a single stdio MCP transport.

mod server;

use std::sync::Arc;

use groq_async::config::Config as _;
use rmcp::{ServiceExt, transport::stdio};
use tracing::info;
use web_research::{AppConfig, WebResearch};

use crate::server::ResearchServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs must go to stderr: stdout carries the MCP transport.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Install the rustls CryptoProvider before any HTTP clients are created;
    // rustls 0.23+ panics if it cannot auto-select a single provider.
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    // Missing credentials abort startup before anything is servable.
    let config = AppConfig::from_env()?;
    info!(
        "Initialized research server with Groq model: {}",
        config.groq.model()
    );

    let state = Arc::new(WebResearch::new(config));
    let server = ResearchServer::new(state).with_info("research-mcp", env!("CARGO_PKG_VERSION"));

    let service = server.serve(stdio()).await?;
    service.waiting().await?;

    Ok(())
}

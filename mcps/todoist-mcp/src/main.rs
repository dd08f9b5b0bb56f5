//! Todoist MCP Server
//!
//! Todoist projects, sections, tasks, labels and comments over stdio.
//!
//! # Configuration
//! Set `TODOIST_API_TOKEN` env var or configure in `~/.binks/todoist.toml`

use std::sync::Arc;

use rmcp::{transport::stdio, ServiceExt};

use todoist_mcp::{Config, RestApi, TodoistClient, TodoistMcpServer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    mcp_common::init_tracing("todoist_mcp")?;

    tracing::info!("Starting Todoist MCP Server");

    let config = Config::load()?;
    tracing::info!(
        "Todoist API: {} (page size {})",
        config.api.base_url,
        config.api.page_size
    );

    let api = RestApi::new(config.base_url()?, config.token()?, config.api.page_size)?;
    let client = TodoistClient::new(Arc::new(api));
    let server = TodoistMcpServer::new(Arc::new(client));
    let service = server.serve(stdio()).await?;

    tracing::info!("Server running, waiting for requests...");
    service.waiting().await?;

    tracing::info!("Server shutting down");
    Ok(())
}

//! Todoist MCP Library
//!
//! Projects, sections, tasks, labels and comments from the Todoist REST API,
//! exposed as MCP tools and resources.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use todoist_mcp::{RestApi, TodoistClient, TodoistMcpServer};
//!
//! let api = RestApi::new(base_url, token, 50)?;
//! let server = TodoistMcpServer::new(Arc::new(TodoistClient::new(Arc::new(api))));
//! // Use with in-memory transport or serve via stdio
//! ```
//!
//! - Every list operation follows `next_cursor` until the collection is exhausted
//! - `dueDatetime` wins over `dueDate` when both are supplied
//! - Move and comment targets are checked locally before any request is sent

pub mod client;
pub mod config;
pub mod handlers;
pub mod params;
pub mod server;
pub mod todoist;

// Re-export main server type
pub use client::TodoistClient;
pub use config::Config;
pub use server::TodoistMcpServer;
pub use todoist::{RestApi, TodoistApi, TodoistError, TodoistResult};

// Re-export parameter types for direct API usage
pub use params::*;

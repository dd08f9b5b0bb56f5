//! MCP Common - Shared plumbing for MCP servers
//!
//! - **Initialization**: [`init_tracing`] sets up stderr logging (stdout belongs to the protocol)
//! - **Results**: builders for `CallToolResult` and `ReadResourceResult` replies
//! - **Errors**: [`IntoMcpError`] and friends for turning domain errors into `ErrorData`
//!
//! # Example
//!
//! ```rust,ignore
//! use mcp_common::{summary_json_success, ResultExt};
//!
//! async fn get_things(&self) -> Result<CallToolResult, McpError> {
//!     let things = self.client.get_things().await.to_mcp_err()?;
//!     summary_json_success(format!("Retrieved {} thing(s)", things.len()), &things)
//! }
//! ```

pub mod error;
pub mod init;
pub mod result;

pub use error::{
    internal_error, invalid_params, resource_not_found, IntoMcpError, McpResult, ResultExt,
};
pub use init::{init_tracing, LogFormat};
pub use result::{json_resource, json_success, summary_json_success, text_success};

pub use rmcp::{
    model::{CallToolResult, Content, ReadResourceResult},
    ErrorData as McpError,
};

//! Error conversion for MCP tool and resource handlers
//!
//! Domain crates implement [`IntoMcpError`] for their error type and then use
//! [`ResultExt::to_mcp_err`] at the handler boundary.

use rmcp::ErrorData as McpError;

/// Type alias for MCP handler results
pub type McpResult<T> = Result<T, McpError>;

/// Conversion of a domain error into an MCP error
///
/// ```rust,ignore
/// impl IntoMcpError for ApiError {
///     fn into_mcp_error(self) -> McpError {
///         match self {
///             ApiError::BadInput(msg) => invalid_params(msg),
///             other => internal_error(other.to_string()),
///         }
///     }
/// }
/// ```
pub trait IntoMcpError {
    fn into_mcp_error(self) -> McpError;
}

impl IntoMcpError for serde_json::Error {
    fn into_mcp_error(self) -> McpError {
        McpError::internal_error(format!("JSON error: {}", self), None)
    }
}

impl IntoMcpError for anyhow::Error {
    fn into_mcp_error(self) -> McpError {
        McpError::internal_error(self.to_string(), None)
    }
}

/// Adds `to_mcp_err()` to any `Result` whose error implements [`IntoMcpError`]
pub trait ResultExt<T> {
    fn to_mcp_err(self) -> Result<T, McpError>;
}

impl<T, E: IntoMcpError> ResultExt<T> for Result<T, E> {
    fn to_mcp_err(self) -> Result<T, McpError> {
        self.map_err(IntoMcpError::into_mcp_error)
    }
}

/// Internal error: the operation was attempted and failed
pub fn internal_error(message: impl Into<String>) -> McpError {
    McpError::internal_error(message.into(), None)
}

/// Invalid params: the request was rejected before doing any work
pub fn invalid_params(message: impl Into<String>) -> McpError {
    McpError::invalid_params(message.into(), None)
}

/// Resource not found: the URI does not name a known resource
pub fn resource_not_found(uri: impl AsRef<str>) -> McpError {
    McpError::resource_not_found(format!("Unknown resource: {}", uri.as_ref()), None)
}

//! Error types for Todoist API operations

use mcp_common::{internal_error, invalid_params, IntoMcpError, McpError};
use thiserror::Error;

/// Errors that can occur when talking to the Todoist API
#[derive(Error, Debug)]
pub enum TodoistError {
    /// Transport-level failure (DNS, TLS, connection reset, body read)
    #[error("todoist request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("todoist API error ({status}): {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body as returned by the API
        body: String,
    },

    /// The response body did not match the expected shape
    #[error("failed to decode todoist response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Rejected locally before any request was sent
    #[error("{0}")]
    InvalidRequest(String),
}

impl TodoistError {
    pub fn invalid(message: impl Into<String>) -> Self {
        TodoistError::InvalidRequest(message.into())
    }
}

impl IntoMcpError for TodoistError {
    fn into_mcp_error(self) -> McpError {
        match self {
            TodoistError::InvalidRequest(msg) => invalid_params(msg),
            other => internal_error(other.to_string()),
        }
    }
}

/// Result type alias for Todoist operations
pub type TodoistResult<T> = Result<T, TodoistError>;

//! Handler implementations for todoist-mcp tools
//!
//! Each handler checks what the input schema promises, converts params into
//! client payloads, calls the [`TodoistClient`](crate::client::TodoistClient)
//! and turns the result into a `CallToolResult`.

mod comment;
mod label;
mod project;
mod resources;
mod section;
mod task;

pub use comment::*;
pub use label::*;
pub use project::*;
pub use resources::*;
pub use section::*;
pub use task::*;

use mcp_common::{invalid_params, text_success, CallToolResult, McpError};

/// Reject blank strings for fields the schema marks as required
pub(crate) fn require_non_empty(field: &str, value: &str) -> Result<(), McpError> {
    if value.trim().is_empty() {
        return Err(invalid_params(format!("{} must not be empty", field)));
    }
    Ok(())
}

/// Priority runs from 1 (normal) to 4 (urgent)
pub(crate) fn check_priority(priority: Option<u8>) -> Result<(), McpError> {
    match priority {
        Some(p) if !(1..=4).contains(&p) => Err(invalid_params(format!(
            "priority must be between 1 and 4, got {}",
            p
        ))),
        _ => Ok(()),
    }
}

/// Single-line reply for deletions and state changes
pub(crate) fn outcome(success: bool, done: String, failed: String) -> CallToolResult {
    text_success(if success { done } else { failed })
}

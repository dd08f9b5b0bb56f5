//! Parameter types for Todoist MCP tools
//!
//! Field names are camelCase on the wire (`projectId`, `dueDatetime`, ...).

mod comment;
mod label;
mod project;
mod section;
mod task;

pub use comment::*;
pub use label::*;
pub use project::*;
pub use section::*;
pub use task::*;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Empty parameters for tools that take no arguments
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct EmptyParams {}

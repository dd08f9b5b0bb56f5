//! Reply builders for MCP tools and resources

use rmcp::{
    model::{CallToolResult, Content, ReadResourceResult, ResourceContents},
    ErrorData as McpError,
};
use serde::Serialize;

fn to_pretty_json<T: Serialize>(data: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(data).map_err(|e| McpError::internal_error(e.to_string(), None))
}

/// Successful reply carrying pretty-printed JSON only
pub fn json_success<T: Serialize>(data: &T) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::success(vec![Content::text(to_pretty_json(
        data,
    )?)]))
}

/// Successful reply with a one-line summary followed by the JSON payload
///
/// Agents read the summary; the JSON block carries the full object for
/// follow-up calls that need ids or metadata.
///
/// ```rust,ignore
/// summary_json_success(format!("Retrieved {} task(s)", tasks.len()), &tasks)
/// ```
pub fn summary_json_success<T: Serialize>(
    summary: impl Into<String>,
    data: &T,
) -> Result<CallToolResult, McpError> {
    let json = to_pretty_json(data)?;
    Ok(CallToolResult::success(vec![
        Content::text(summary.into()),
        Content::text(json),
    ]))
}

/// Successful plain text reply
pub fn text_success(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

/// Resource read reply carrying the JSON form of `data` under `uri`
pub fn json_resource<T: Serialize>(
    uri: impl Into<String>,
    data: &T,
) -> Result<ReadResourceResult, McpError> {
    let json = to_pretty_json(data)?;
    Ok(ReadResourceResult {
        contents: vec![ResourceContents::text(json, uri)],
    })
}

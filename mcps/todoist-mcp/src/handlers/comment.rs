//! Comment handlers

use mcp_common::{summary_json_success, CallToolResult, McpError, ResultExt};

use super::{outcome, require_non_empty};
use crate::client::TodoistClient;
use crate::params::*;

pub async fn create_comment(
    client: &TodoistClient,
    params: CreateCommentParams,
) -> Result<CallToolResult, McpError> {
    require_non_empty("content", &params.content)?;

    let target = match (&params.task_id, &params.project_id) {
        (Some(id), None) => format!("task {}", id),
        (None, Some(id)) => format!("project {}", id),
        // the client rejects the remaining shapes
        _ => String::new(),
    };

    let comment = client
        .create_comment(
            params.content,
            params.task_id,
            params.project_id,
            params.attachment.map(Into::into),
        )
        .await
        .to_mcp_err()?;

    summary_json_success(
        format!(
            "Comment created successfully on {} with ID: {}",
            target, comment.id
        ),
        &comment,
    )
}

pub async fn update_comment(
    client: &TodoistClient,
    params: UpdateCommentParams,
) -> Result<CallToolResult, McpError> {
    require_non_empty("id", &params.id)?;
    require_non_empty("content", &params.content)?;

    let comment = client
        .update_comment(&params.id, params.content)
        .await
        .to_mcp_err()?;

    summary_json_success(
        format!("Comment (ID: {}) updated successfully", comment.id),
        &comment,
    )
}

pub async fn get_task_comments(
    client: &TodoistClient,
    params: GetTaskCommentsParams,
) -> Result<CallToolResult, McpError> {
    require_non_empty("taskId", &params.task_id)?;
    let comments = client
        .get_task_comments(&params.task_id)
        .await
        .to_mcp_err()?;
    summary_json_success(
        format!(
            "Retrieved {} comment(s) for task ID: {}",
            comments.len(),
            params.task_id
        ),
        &comments,
    )
}

pub async fn get_project_comments(
    client: &TodoistClient,
    params: GetProjectCommentsParams,
) -> Result<CallToolResult, McpError> {
    require_non_empty("projectId", &params.project_id)?;
    let comments = client
        .get_project_comments(&params.project_id)
        .await
        .to_mcp_err()?;
    summary_json_success(
        format!(
            "Retrieved {} comment(s) for project ID: {}",
            comments.len(),
            params.project_id
        ),
        &comments,
    )
}

pub async fn delete_comment(
    client: &TodoistClient,
    params: DeleteCommentParams,
) -> Result<CallToolResult, McpError> {
    require_non_empty("id", &params.id)?;
    let deleted = client.delete_comment(&params.id).await.to_mcp_err()?;
    Ok(outcome(
        deleted,
        format!("Comment (ID: {}) deleted successfully", params.id),
        format!("Failed to delete comment (ID: {})", params.id),
    ))
}

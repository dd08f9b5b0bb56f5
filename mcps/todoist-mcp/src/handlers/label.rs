//! Label handlers

use mcp_common::{summary_json_success, CallToolResult, McpError, ResultExt};

use super::{outcome, require_non_empty};
use crate::client::TodoistClient;
use crate::params::*;
use crate::todoist::types::{AddLabelArgs, UpdateLabelArgs};

pub async fn create_label(
    client: &TodoistClient,
    params: CreateLabelParams,
) -> Result<CallToolResult, McpError> {
    require_non_empty("name", &params.name)?;

    let label = client
        .create_label(AddLabelArgs {
            name: params.name,
            color: params.color,
            order: params.order,
            is_favorite: params.is_favorite,
        })
        .await
        .to_mcp_err()?;

    summary_json_success(
        format!(
            "Label \"{}\" created successfully with ID: {}",
            label.name, label.id
        ),
        &label,
    )
}

pub async fn update_label(
    client: &TodoistClient,
    params: UpdateLabelParams,
) -> Result<CallToolResult, McpError> {
    require_non_empty("id", &params.id)?;

    let args = UpdateLabelArgs {
        name: params.name,
        color: params.color,
        order: params.order,
        is_favorite: params.is_favorite,
    };
    let label = client.update_label(&params.id, args).await.to_mcp_err()?;

    summary_json_success(
        format!(
            "Label \"{}\" (ID: {}) updated successfully",
            label.name, label.id
        ),
        &label,
    )
}

pub async fn delete_label(
    client: &TodoistClient,
    params: DeleteLabelParams,
) -> Result<CallToolResult, McpError> {
    require_non_empty("id", &params.id)?;
    let deleted = client.delete_label(&params.id).await.to_mcp_err()?;
    Ok(outcome(
        deleted,
        format!("Label (ID: {}) deleted successfully", params.id),
        format!("Failed to delete label (ID: {})", params.id),
    ))
}

pub async fn get_labels(client: &TodoistClient) -> Result<CallToolResult, McpError> {
    let labels = client.get_labels().await.to_mcp_err()?;
    summary_json_success(format!("Retrieved {} label(s)", labels.len()), &labels)
}

pub async fn get_label(
    client: &TodoistClient,
    params: GetLabelParams,
) -> Result<CallToolResult, McpError> {
    require_non_empty("id", &params.id)?;
    let label = client.get_label(&params.id).await.to_mcp_err()?;
    summary_json_success(
        format!("Retrieved label \"{}\" (ID: {})", label.name, label.id),
        &label,
    )
}

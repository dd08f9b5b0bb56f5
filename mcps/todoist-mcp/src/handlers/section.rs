//! Section handlers

use mcp_common::{summary_json_success, CallToolResult, McpError, ResultExt};

use super::{outcome, require_non_empty};
use crate::client::TodoistClient;
use crate::params::*;
use crate::todoist::types::{AddSectionArgs, UpdateSectionArgs};

pub async fn create_section(
    client: &TodoistClient,
    params: CreateSectionParams,
) -> Result<CallToolResult, McpError> {
    require_non_empty("name", &params.name)?;
    require_non_empty("projectId", &params.project_id)?;

    let section = client
        .create_section(AddSectionArgs {
            name: params.name,
            project_id: params.project_id,
            order: params.order,
        })
        .await
        .to_mcp_err()?;

    summary_json_success(
        format!(
            "Section \"{}\" created successfully with ID: {}",
            section.name, section.id
        ),
        &section,
    )
}

pub async fn update_section(
    client: &TodoistClient,
    params: UpdateSectionParams,
) -> Result<CallToolResult, McpError> {
    require_non_empty("id", &params.id)?;
    require_non_empty("name", &params.name)?;

    let section = client
        .update_section(&params.id, UpdateSectionArgs { name: params.name })
        .await
        .to_mcp_err()?;

    summary_json_success(
        format!(
            "Section \"{}\" (ID: {}) updated successfully",
            section.name, section.id
        ),
        &section,
    )
}

pub async fn delete_section(
    client: &TodoistClient,
    params: DeleteSectionParams,
) -> Result<CallToolResult, McpError> {
    require_non_empty("id", &params.id)?;
    let deleted = client.delete_section(&params.id).await.to_mcp_err()?;
    Ok(outcome(
        deleted,
        format!("Section (ID: {}) deleted successfully", params.id),
        format!("Failed to delete section (ID: {})", params.id),
    ))
}

pub async fn get_sections(
    client: &TodoistClient,
    params: GetSectionsParams,
) -> Result<CallToolResult, McpError> {
    require_non_empty("projectId", &params.project_id)?;
    let sections = client
        .get_sections(&params.project_id)
        .await
        .to_mcp_err()?;
    summary_json_success(
        format!(
            "Retrieved {} section(s) from project {}",
            sections.len(),
            params.project_id
        ),
        &sections,
    )
}

pub async fn get_section(
    client: &TodoistClient,
    params: GetSectionParams,
) -> Result<CallToolResult, McpError> {
    require_non_empty("id", &params.id)?;
    let section = client.get_section(&params.id).await.to_mcp_err()?;
    summary_json_success(
        format!("Retrieved section \"{}\" (ID: {})", section.name, section.id),
        &section,
    )
}

//! Project handlers

use mcp_common::{summary_json_success, CallToolResult, McpError, ResultExt};

use super::{outcome, require_non_empty};
use crate::client::TodoistClient;
use crate::params::*;
use crate::todoist::types::{AddProjectArgs, UpdateProjectArgs};

pub async fn create_project(
    client: &TodoistClient,
    params: CreateProjectParams,
) -> Result<CallToolResult, McpError> {
    require_non_empty("name", &params.name)?;

    let project = client
        .create_project(AddProjectArgs {
            name: params.name,
            parent_id: params.parent_id,
            color: params.color,
            is_favorite: params.is_favorite,
            view_style: params.view_style,
        })
        .await
        .to_mcp_err()?;

    summary_json_success(
        format!(
            "Project \"{}\" created successfully with ID: {}",
            project.name, project.id
        ),
        &project,
    )
}

pub async fn update_project(
    client: &TodoistClient,
    params: UpdateProjectParams,
) -> Result<CallToolResult, McpError> {
    require_non_empty("id", &params.id)?;
    if let Some(name) = &params.name {
        require_non_empty("name", name)?;
    }

    let args = UpdateProjectArgs {
        name: params.name,
        color: params.color,
        is_favorite: params.is_favorite,
        view_style: params.view_style,
    };
    let project = client
        .update_project(&params.id, args)
        .await
        .to_mcp_err()?;

    summary_json_success(
        format!(
            "Project \"{}\" (ID: {}) updated successfully",
            project.name, project.id
        ),
        &project,
    )
}

pub async fn delete_project(
    client: &TodoistClient,
    params: DeleteProjectParams,
) -> Result<CallToolResult, McpError> {
    require_non_empty("id", &params.id)?;
    let deleted = client.delete_project(&params.id).await.to_mcp_err()?;
    Ok(outcome(
        deleted,
        format!("Project (ID: {}) deleted successfully", params.id),
        format!("Failed to delete project (ID: {})", params.id),
    ))
}

pub async fn get_projects(client: &TodoistClient) -> Result<CallToolResult, McpError> {
    let projects = client.get_projects().await.to_mcp_err()?;
    summary_json_success(format!("Retrieved {} project(s)", projects.len()), &projects)
}

pub async fn get_project(
    client: &TodoistClient,
    params: GetProjectParams,
) -> Result<CallToolResult, McpError> {
    require_non_empty("id", &params.id)?;
    let project = client.get_project(&params.id).await.to_mcp_err()?;
    summary_json_success(
        format!("Retrieved project \"{}\" (ID: {})", project.name, project.id),
        &project,
    )
}

//! Task handlers

use mcp_common::{summary_json_success, text_success, CallToolResult, McpError, ResultExt};
use tracing::warn;

use super::{check_priority, outcome, require_non_empty};
use crate::client::TodoistClient;
use crate::params::*;
use crate::todoist::types::{AddTaskArgs, QuickAddArgs, TaskFilter, UpdateTaskArgs};

pub async fn create_task(
    client: &TodoistClient,
    params: CreateTaskParams,
) -> Result<CallToolResult, McpError> {
    require_non_empty("content", &params.content)?;
    check_priority(params.priority)?;

    let args = AddTaskArgs {
        content: params.content,
        description: params.description,
        project_id: params.project_id,
        section_id: params.section_id,
        parent_id: params.parent_id,
        child_order: params.child_order,
        labels: params.labels,
        priority: params.priority,
        due_string: params.due_string,
        due_date: params.due_date,
        due_datetime: params.due_datetime,
        due_lang: params.due_lang,
        assignee_id: params.assignee_id,
        duration: params.duration,
        duration_unit: params.duration_unit,
    };
    let task = client.create_task(args).await.to_mcp_err()?;

    summary_json_success(
        format!(
            "Task \"{}\" created successfully with ID: {}",
            task.content, task.id
        ),
        &task,
    )
}

pub async fn update_task(
    client: &TodoistClient,
    params: UpdateTaskParams,
) -> Result<CallToolResult, McpError> {
    require_non_empty("id", &params.id)?;
    if let Some(content) = &params.content {
        require_non_empty("content", content)?;
    }
    check_priority(params.priority)?;

    let args = UpdateTaskArgs {
        content: params.content,
        description: params.description,
        labels: params.labels,
        priority: params.priority,
        due_string: params.due_string,
        due_date: params.due_date,
        due_datetime: params.due_datetime,
        due_lang: params.due_lang,
        assignee_id: params.assignee_id,
        duration: params.duration,
        duration_unit: params.duration_unit,
    };
    let task = client.update_task(&params.id, args).await.to_mcp_err()?;

    summary_json_success(
        format!(
            "Task \"{}\" (ID: {}) updated successfully",
            task.content, task.id
        ),
        &task,
    )
}

pub async fn delete_task(
    client: &TodoistClient,
    params: DeleteTaskParams,
) -> Result<CallToolResult, McpError> {
    require_non_empty("id", &params.id)?;
    let deleted = client.delete_task(&params.id).await.to_mcp_err()?;
    Ok(outcome(
        deleted,
        format!("Task (ID: {}) deleted successfully", params.id),
        format!("Failed to delete task (ID: {})", params.id),
    ))
}

pub async fn close_task(
    client: &TodoistClient,
    params: CloseTaskParams,
) -> Result<CallToolResult, McpError> {
    require_non_empty("id", &params.id)?;
    let closed = client.close_task(&params.id).await.to_mcp_err()?;
    Ok(outcome(
        closed,
        format!("Task (ID: {}) marked as completed successfully", params.id),
        format!("Failed to complete task (ID: {})", params.id),
    ))
}

pub async fn reopen_task(
    client: &TodoistClient,
    params: ReopenTaskParams,
) -> Result<CallToolResult, McpError> {
    require_non_empty("id", &params.id)?;

    if !client.reopen_task(&params.id).await.to_mcp_err()? {
        warn!(task_id = %params.id, "reopen reported no change");
        return Ok(text_success(format!(
            "Failed to reopen task with ID: {}",
            params.id
        )));
    }

    let task = client.get_task(&params.id).await.to_mcp_err()?;
    summary_json_success(
        format!(
            "Task \"{}\" (ID: {}) reopened successfully",
            task.content, task.id
        ),
        &task,
    )
}

pub async fn get_tasks(
    client: &TodoistClient,
    params: GetTasksParams,
) -> Result<CallToolResult, McpError> {
    let filter = TaskFilter {
        project_id: params.project_id,
        section_id: params.section_id,
        label: params.label_id,
        ids: params.ids,
        filter: params.filter,
        lang: params.lang,
    };
    let tasks = client.get_tasks(filter).await.to_mcp_err()?;
    summary_json_success(format!("Retrieved {} task(s)", tasks.len()), &tasks)
}

pub async fn get_task(
    client: &TodoistClient,
    params: GetTaskParams,
) -> Result<CallToolResult, McpError> {
    require_non_empty("id", &params.id)?;
    let task = client.get_task(&params.id).await.to_mcp_err()?;
    summary_json_success(
        format!("Retrieved task \"{}\" (ID: {})", task.content, task.id),
        &task,
    )
}

pub async fn move_tasks(
    client: &TodoistClient,
    params: MoveTasksParams,
) -> Result<CallToolResult, McpError> {
    let tasks = client
        .move_tasks(
            params.ids,
            params.project_id,
            params.section_id,
            params.parent_id,
        )
        .await
        .to_mcp_err()?;
    summary_json_success(format!("Moved {} task(s)", tasks.len()), &tasks)
}

pub async fn quick_add_task(
    client: &TodoistClient,
    params: QuickAddTaskParams,
) -> Result<CallToolResult, McpError> {
    require_non_empty("text", &params.text)?;

    let text = params.text.clone();
    let task = client
        .quick_add_task(QuickAddArgs {
            text: params.text,
            note: params.note,
            reminder: params.reminder,
            auto_reminder: params.auto_reminder,
            meta: params.meta,
        })
        .await
        .to_mcp_err()?;

    summary_json_success(
        format!(
            "Task \"{}\" created successfully with ID: {} using natural language: \"{}\"",
            task.content, task.id, text
        ),
        &task,
    )
}

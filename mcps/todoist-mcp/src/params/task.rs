//! Task-related parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::todoist::types::DurationUnit;

/// Parameters for creating a task
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskParams {
    #[schemars(description = "Task content/title")]
    pub content: String,

    #[serde(default)]
    #[schemars(description = "Detailed task description (optional)")]
    pub description: Option<String>,

    #[serde(default)]
    #[schemars(description = "ID of the project to add the task to (optional)")]
    pub project_id: Option<String>,

    #[serde(default)]
    #[schemars(description = "ID of the section within the project (optional)")]
    pub section_id: Option<String>,

    #[serde(default)]
    #[schemars(description = "ID of parent task for creating subtasks (optional)")]
    pub parent_id: Option<String>,

    #[serde(default)]
    #[schemars(description = "Position in project/parent task (optional)")]
    pub child_order: Option<i64>,

    #[serde(default)]
    #[schemars(description = "Array of label names to assign (optional)")]
    pub labels: Option<Vec<String>>,

    #[serde(default)]
    #[schemars(
        description = "Priority level: 1=normal, 2=high, 3=very high, 4=urgent (optional)",
        range(min = 1, max = 4)
    )]
    pub priority: Option<u8>,

    #[serde(default)]
    #[schemars(
        description = "Natural language due date like 'tomorrow', 'next Monday at 2pm' (optional)"
    )]
    pub due_string: Option<String>,

    #[serde(default)]
    #[schemars(description = "Due date in YYYY-MM-DD format (optional)")]
    pub due_date: Option<String>,

    #[serde(default)]
    #[schemars(description = "Due datetime in RFC 3339 format; wins over dueDate (optional)")]
    pub due_datetime: Option<String>,

    #[serde(default)]
    #[schemars(description = "Language for natural language due date parsing (optional)")]
    pub due_lang: Option<String>,

    #[serde(default)]
    #[schemars(description = "ID of user to assign task to (optional)")]
    pub assignee_id: Option<String>,

    #[serde(default)]
    #[schemars(description = "Task duration amount (optional)")]
    pub duration: Option<u32>,

    #[serde(default)]
    #[schemars(description = "Duration unit: minute or day (optional)")]
    pub duration_unit: Option<DurationUnit>,
}

/// Parameters for updating a task; omitted fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskParams {
    #[schemars(description = "ID of the task to update")]
    pub id: String,

    #[serde(default)]
    #[schemars(description = "New task content/title (optional)")]
    pub content: Option<String>,

    #[serde(default)]
    #[schemars(description = "New task description (optional)")]
    pub description: Option<String>,

    #[serde(default)]
    #[schemars(description = "New array of label names (optional)")]
    pub labels: Option<Vec<String>>,

    #[serde(default)]
    #[schemars(
        description = "New priority level: 1=normal, 2=high, 3=very high, 4=urgent (optional)",
        range(min = 1, max = 4)
    )]
    pub priority: Option<u8>,

    #[serde(default)]
    #[schemars(description = "New natural language due date (optional)")]
    pub due_string: Option<String>,

    #[serde(default)]
    #[schemars(description = "New due date in YYYY-MM-DD format (optional)")]
    pub due_date: Option<String>,

    #[serde(default)]
    #[schemars(description = "New due datetime in RFC 3339 format; wins over dueDate (optional)")]
    pub due_datetime: Option<String>,

    #[serde(default)]
    #[schemars(description = "Language for natural language due date parsing (optional)")]
    pub due_lang: Option<String>,

    #[serde(default)]
    #[schemars(description = "New assignee user ID (optional)")]
    pub assignee_id: Option<String>,

    #[serde(default)]
    #[schemars(description = "New task duration amount (optional)")]
    pub duration: Option<u32>,

    #[serde(default)]
    #[schemars(description = "New duration unit (optional)")]
    pub duration_unit: Option<DurationUnit>,
}

/// Parameters for deleting a task
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DeleteTaskParams {
    #[schemars(description = "ID of the task to delete")]
    pub id: String,
}

/// Parameters for completing a task
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CloseTaskParams {
    #[schemars(description = "ID of the task to mark as completed")]
    pub id: String,
}

/// Parameters for reopening a completed task
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ReopenTaskParams {
    #[schemars(description = "ID of the completed task to reopen")]
    pub id: String,
}

/// Parameters for listing tasks
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetTasksParams {
    #[serde(default)]
    #[schemars(description = "Filter tasks by project ID (optional)")]
    pub project_id: Option<String>,

    #[serde(default)]
    #[schemars(description = "Filter tasks by section ID (optional)")]
    pub section_id: Option<String>,

    #[serde(default)]
    #[schemars(description = "Filter tasks by label name (optional)")]
    pub label_id: Option<String>,

    #[serde(default)]
    #[schemars(
        description = "Custom filter query in Todoist filter syntax; other filters are ignored when set (optional)"
    )]
    pub filter: Option<String>,

    #[serde(default)]
    #[schemars(description = "Language for filter parsing (optional)")]
    pub lang: Option<String>,

    #[serde(default)]
    #[schemars(description = "Array of specific task IDs to retrieve (optional)")]
    pub ids: Option<Vec<String>>,
}

/// Parameters for fetching one task
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetTaskParams {
    #[schemars(description = "ID of the task to retrieve")]
    pub id: String,
}

/// Parameters for moving a batch of tasks
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MoveTasksParams {
    #[schemars(description = "IDs of the tasks to move")]
    pub ids: Vec<String>,

    #[serde(default)]
    #[schemars(description = "Destination project ID (exactly one destination must be given)")]
    pub project_id: Option<String>,

    #[serde(default)]
    #[schemars(description = "Destination section ID (exactly one destination must be given)")]
    pub section_id: Option<String>,

    #[serde(default)]
    #[schemars(
        description = "Destination parent task ID, making the tasks subtasks (exactly one destination must be given)"
    )]
    pub parent_id: Option<String>,
}

/// Parameters for natural-language quick add
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuickAddTaskParams {
    #[schemars(
        description = "Task text with inline syntax, e.g. 'Buy milk tomorrow #Shopping @errand p1'"
    )]
    pub text: String,

    #[serde(default)]
    #[schemars(description = "Note to attach as the first comment (optional)")]
    pub note: Option<String>,

    #[serde(default)]
    #[schemars(description = "Reminder in natural language, e.g. '30 minutes before' (optional)")]
    pub reminder: Option<String>,

    #[serde(default)]
    #[schemars(description = "Add the default reminder when a due time is set (optional)")]
    pub auto_reminder: Option<bool>,

    #[serde(default)]
    #[schemars(description = "Return parsing metadata along with the task (optional)")]
    pub meta: Option<bool>,
}

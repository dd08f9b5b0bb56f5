//! Todoist wire types
//!
//! Response models type the fields the server reasons about and keep every
//! other field in a flattened `extra` map, so objects reach the agent intact.
//! Request payloads skip `None` fields entirely; the API reads a missing
//! field as "leave unchanged".

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::{TodoistError, TodoistResult};

/// Fields of a response object that are not modelled explicitly
pub type Extra = Map<String, Value>;

// ============================================================================
// Enums shared by requests and responses
// ============================================================================

/// Project view style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ViewStyle {
    List,
    Board,
    Calendar,
}

/// Unit of a task duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    Minute,
    Day,
}

// ============================================================================
// Response models
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub child_order: Option<i64>,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub is_archived: bool,
    #[serde(default)]
    pub is_shared: bool,
    /// Kept as a string: the API has grown view styles before
    #[serde(default)]
    pub view_style: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Due {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub datetime: Option<String>,
    #[serde(default)]
    pub string: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(default)]
    pub is_recurring: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskDuration {
    pub amount: u32,
    pub unit: DurationUnit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub content: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub section_id: Option<String>,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub priority: Option<u8>,
    #[serde(default)]
    pub due: Option<Due>,
    #[serde(default)]
    pub duration: Option<TaskDuration>,
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub child_order: Option<i64>,
    #[serde(default)]
    pub responsible_uid: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub project_id: String,
    pub name: String,
    #[serde(default)]
    pub section_order: Option<i64>,
    #[serde(default)]
    pub is_archived: bool,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub order: Option<i64>,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub content: String,
    #[serde(default)]
    pub task_id: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub posted_at: Option<String>,
    #[serde(default)]
    pub file_attachment: Option<Value>,
    #[serde(flatten)]
    pub extra: Extra,
}

// ============================================================================
// Request payloads
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AddProjectArgs {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_favorite: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_style: Option<ViewStyle>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateProjectArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_favorite: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_style: Option<ViewStyle>,
}

/// Filters for listing tasks, resent unchanged with every page request
///
/// A non-empty `filter` expression selects the filter endpoint, where only
/// `filter` and `lang` apply.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskFilter {
    pub project_id: Option<String>,
    pub section_id: Option<String>,
    pub label: Option<String>,
    pub ids: Option<Vec<String>>,
    pub filter: Option<String>,
    pub lang: Option<String>,
}

impl TaskFilter {
    pub fn query_expression(&self) -> Option<&str> {
        self.filter.as_deref().filter(|f| !f.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AddTaskArgs {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child_order: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_datetime: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_unit: Option<DurationUnit>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateTaskArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_datetime: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_unit: Option<DurationUnit>,
}

/// Where a batch of tasks is moved to; serializes as a single-key object
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum MoveDestination {
    #[serde(rename = "project_id")]
    Project(String),
    #[serde(rename = "section_id")]
    Section(String),
    #[serde(rename = "parent_id")]
    Parent(String),
}

/// A blank id counts as not given
fn non_blank(id: Option<String>) -> Option<String> {
    id.filter(|s| !s.trim().is_empty())
}

impl MoveDestination {
    /// Pick the destination when exactly one candidate is present
    pub fn exactly_one(
        project_id: Option<String>,
        section_id: Option<String>,
        parent_id: Option<String>,
    ) -> TodoistResult<Self> {
        match (
            non_blank(project_id),
            non_blank(section_id),
            non_blank(parent_id),
        ) {
            (Some(id), None, None) => Ok(MoveDestination::Project(id)),
            (None, Some(id), None) => Ok(MoveDestination::Section(id)),
            (None, None, Some(id)) => Ok(MoveDestination::Parent(id)),
            _ => Err(TodoistError::invalid(
                "Exactly one of projectId, sectionId, or parentId must be specified",
            )),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QuickAddArgs {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_reminder: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AddSectionArgs {
    pub name: String,
    pub project_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateSectionArgs {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AddLabelArgs {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_favorite: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateLabelArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_favorite: Option<bool>,
}

/// What a comment is attached to; serializes as `task_id` or `project_id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum CommentTarget {
    #[serde(rename = "task_id")]
    Task(String),
    #[serde(rename = "project_id")]
    Project(String),
}

impl CommentTarget {
    /// Pick the target when exactly one of task or project is present
    pub fn exactly_one(task_id: Option<String>, project_id: Option<String>) -> TodoistResult<Self> {
        match (non_blank(task_id), non_blank(project_id)) {
            (Some(id), None) => Ok(CommentTarget::Task(id)),
            (None, Some(id)) => Ok(CommentTarget::Project(id)),
            (None, None) => Err(TodoistError::invalid(
                "Either taskId or projectId must be provided, but not both",
            )),
            (Some(_), Some(_)) => Err(TodoistError::invalid(
                "Cannot specify both taskId and projectId - they are mutually exclusive",
            )),
        }
    }

    /// Query parameter name and value for listing comments on this target
    pub fn query_pair(&self) -> (&'static str, &str) {
        match self {
            CommentTarget::Task(id) => ("task_id", id),
            CommentTarget::Project(id) => ("project_id", id),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub file_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddCommentArgs {
    pub content: String,
    #[serde(flatten)]
    pub target: CommentTarget,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<Attachment>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateCommentArgs {
    pub content: String,
}

//! Comment-related parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::todoist::types::Attachment;

/// File attached to a new comment
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentParams {
    #[schemars(description = "URL of the file to attach")]
    pub file_url: String,

    #[serde(default)]
    #[schemars(description = "Name of the attached file")]
    pub file_name: Option<String>,

    #[serde(default)]
    #[schemars(description = "MIME type of the file")]
    pub file_type: Option<String>,

    #[serde(default)]
    #[schemars(description = "Type of resource")]
    pub resource_type: Option<String>,
}

impl From<AttachmentParams> for Attachment {
    fn from(params: AttachmentParams) -> Self {
        Attachment {
            file_url: params.file_url,
            file_name: params.file_name,
            file_type: params.file_type,
            resource_type: params.resource_type,
        }
    }
}

/// Parameters for commenting on a task or a project
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentParams {
    #[schemars(description = "The text content of the comment")]
    pub content: String,

    #[serde(default)]
    #[schemars(description = "ID of the task to comment on (mutually exclusive with projectId)")]
    pub task_id: Option<String>,

    #[serde(default)]
    #[schemars(description = "ID of the project to comment on (mutually exclusive with taskId)")]
    pub project_id: Option<String>,

    #[serde(default)]
    #[schemars(description = "File attachment (optional)")]
    pub attachment: Option<AttachmentParams>,
}

/// Parameters for editing a comment
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UpdateCommentParams {
    #[schemars(description = "ID of the comment to update")]
    pub id: String,

    #[schemars(description = "New text content of the comment")]
    pub content: String,
}

/// Parameters for listing the comments of a task
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetTaskCommentsParams {
    #[schemars(description = "ID of the task to retrieve comments from")]
    pub task_id: String,
}

/// Parameters for listing the comments of a project
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetProjectCommentsParams {
    #[schemars(description = "ID of the project to retrieve comments from")]
    pub project_id: String,
}

/// Parameters for deleting a comment
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DeleteCommentParams {
    #[schemars(description = "ID of the comment to delete")]
    pub id: String,
}

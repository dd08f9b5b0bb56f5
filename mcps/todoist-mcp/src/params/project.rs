//! Project-related parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::todoist::types::ViewStyle;

/// Parameters for creating a project
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectParams {
    #[schemars(description = "Name of the project to create")]
    pub name: String,

    #[serde(default)]
    #[schemars(description = "ID of parent project (optional)")]
    pub parent_id: Option<String>,

    #[serde(default)]
    #[schemars(description = "Color for the project (optional)")]
    pub color: Option<String>,

    #[serde(default)]
    #[schemars(description = "Mark project as favorite (optional)")]
    pub is_favorite: Option<bool>,

    #[serde(default)]
    #[schemars(description = "View style for the project: list, board or calendar (optional)")]
    pub view_style: Option<ViewStyle>,
}

/// Parameters for updating a project
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectParams {
    #[schemars(description = "ID of the project to update")]
    pub id: String,

    #[serde(default)]
    #[schemars(description = "New name for the project (optional)")]
    pub name: Option<String>,

    #[serde(default)]
    #[schemars(description = "New color for the project (optional)")]
    pub color: Option<String>,

    #[serde(default)]
    #[schemars(description = "Mark project as favorite or not (optional)")]
    pub is_favorite: Option<bool>,

    #[serde(default)]
    #[schemars(description = "New view style for the project (optional)")]
    pub view_style: Option<ViewStyle>,
}

/// Parameters for deleting a project
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DeleteProjectParams {
    #[schemars(description = "ID of the project to delete")]
    pub id: String,
}

/// Parameters for fetching one project
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetProjectParams {
    #[schemars(description = "ID of the project to retrieve")]
    pub id: String,
}

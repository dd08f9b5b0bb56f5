//! Label-related parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for creating a personal label
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateLabelParams {
    #[schemars(description = "Name of the label to create")]
    pub name: String,

    #[serde(default)]
    #[schemars(description = "Color code or key for the label (optional)")]
    pub color: Option<String>,

    #[serde(default)]
    #[schemars(description = "Display order position (optional)")]
    pub order: Option<i64>,

    #[serde(default)]
    #[schemars(description = "Mark label as favorite (optional)")]
    pub is_favorite: Option<bool>,
}

/// Parameters for updating a personal label
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLabelParams {
    #[schemars(description = "ID of the label to update")]
    pub id: String,

    #[serde(default)]
    #[schemars(description = "New name for the label (optional)")]
    pub name: Option<String>,

    #[serde(default)]
    #[schemars(description = "New color for the label (optional)")]
    pub color: Option<String>,

    #[serde(default)]
    #[schemars(description = "New display order position (optional)")]
    pub order: Option<i64>,

    #[serde(default)]
    #[schemars(description = "Mark label as favorite or not (optional)")]
    pub is_favorite: Option<bool>,
}

/// Parameters for deleting a label
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DeleteLabelParams {
    #[schemars(description = "ID of the label to delete")]
    pub id: String,
}

/// Parameters for fetching one label
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetLabelParams {
    #[schemars(description = "ID of the label to retrieve")]
    pub id: String,
}

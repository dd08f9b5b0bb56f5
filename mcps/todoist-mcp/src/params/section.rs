//! Section-related parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for creating a section
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSectionParams {
    #[schemars(description = "Name of the section to create")]
    pub name: String,

    #[schemars(description = "ID of the project to create the section in")]
    pub project_id: String,

    #[serde(default)]
    #[schemars(description = "Order of the section within the project (optional)")]
    pub order: Option<i64>,
}

/// Parameters for renaming a section
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UpdateSectionParams {
    #[schemars(description = "ID of the section to update")]
    pub id: String,

    #[schemars(description = "New name for the section")]
    pub name: String,
}

/// Parameters for deleting a section
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DeleteSectionParams {
    #[schemars(description = "ID of the section to delete")]
    pub id: String,
}

/// Parameters for listing the sections of a project
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetSectionsParams {
    #[schemars(description = "ID of the project to retrieve sections from")]
    pub project_id: String,
}

/// Parameters for fetching one section
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetSectionParams {
    #[schemars(description = "ID of the section to retrieve")]
    pub id: String,
}

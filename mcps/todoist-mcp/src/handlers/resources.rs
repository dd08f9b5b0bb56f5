//! Read-only MCP resources
//!
//! `todoist://projects` and `todoist://tasks` list whole collections;
//! `todoist://projects/{id}` and `todoist://tasks/{id}` read single items.

use mcp_common::{internal_error, json_resource, resource_not_found, McpError, ResultExt};
use rmcp::model::{AnnotateAble, RawResource, ReadResourceResult, Resource, ResourceTemplate};
use serde_json::json;

use crate::client::TodoistClient;
use crate::todoist::types::TaskFilter;

const SCHEME: &str = "todoist://";
const JSON_MIME: &str = "application/json";

/// A URI this server knows how to read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoistUri {
    Projects,
    Project(String),
    Tasks,
    Task(String),
}

impl TodoistUri {
    pub fn parse(uri: &str) -> Option<Self> {
        let path = uri.strip_prefix(SCHEME)?;
        let segments: Vec<&str> = path.split('/').collect();

        match segments.as_slice() {
            ["projects"] => Some(TodoistUri::Projects),
            ["tasks"] => Some(TodoistUri::Tasks),
            ["projects", id] if !id.is_empty() => Some(TodoistUri::Project(id.to_string())),
            ["tasks", id] if !id.is_empty() => Some(TodoistUri::Task(id.to_string())),
            _ => None,
        }
    }
}

fn resource(uri: &str, name: &str, description: &str) -> Resource {
    let mut raw = RawResource::new(uri, name);
    raw.description = Some(description.to_string());
    raw.mime_type = Some(JSON_MIME.to_string());
    raw.no_annotation()
}

/// Static resources
pub fn list_resources() -> Vec<Resource> {
    vec![
        resource(
            "todoist://projects",
            "projects",
            "All Todoist projects accessible to the authenticated user, with name, color, \
             favorite status, view style and hierarchy information.",
        ),
        resource(
            "todoist://tasks",
            "tasks",
            "All active Todoist tasks with content, description, project assignment, \
             due dates, priority levels, labels and hierarchy information.",
        ),
    ]
}

/// Parameterised resources
pub fn list_resource_templates() -> Result<Vec<ResourceTemplate>, McpError> {
    let templates = json!([
        {
            "uriTemplate": "todoist://projects/{id}",
            "name": "project",
            "description": "A single Todoist project by its unique identifier.",
            "mimeType": JSON_MIME,
        },
        {
            "uriTemplate": "todoist://tasks/{id}",
            "name": "task",
            "description": "A single Todoist task by its unique identifier.",
            "mimeType": JSON_MIME,
        },
    ]);
    serde_json::from_value(templates).map_err(|e| internal_error(e.to_string()))
}

pub async fn read_resource(
    client: &TodoistClient,
    uri: &str,
) -> Result<ReadResourceResult, McpError> {
    match TodoistUri::parse(uri).ok_or_else(|| resource_not_found(uri))? {
        TodoistUri::Projects => {
            let projects = client.get_projects().await.to_mcp_err()?;
            json_resource(uri, &projects)
        }
        TodoistUri::Project(id) => {
            let project = client.get_project(&id).await.to_mcp_err()?;
            json_resource(uri, &project)
        }
        TodoistUri::Tasks => {
            let tasks = client
                .get_tasks(TaskFilter::default())
                .await
                .to_mcp_err()?;
            json_resource(uri, &tasks)
        }
        TodoistUri::Task(id) => {
            let task = client.get_task(&id).await.to_mcp_err()?;
            json_resource(uri, &task)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_uris() {
        assert_eq!(
            TodoistUri::parse("todoist://projects"),
            Some(TodoistUri::Projects)
        );
        assert_eq!(TodoistUri::parse("todoist://tasks"), Some(TodoistUri::Tasks));
        assert_eq!(
            TodoistUri::parse("todoist://projects/6Jf8VQXxpwv56VQ7"),
            Some(TodoistUri::Project("6Jf8VQXxpwv56VQ7".to_string()))
        );
        assert_eq!(
            TodoistUri::parse("todoist://tasks/42"),
            Some(TodoistUri::Task("42".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_unknown_uris() {
        for uri in [
            "todoist://labels",
            "todoist://tasks/",
            "todoist://tasks/1/comments",
            "file:///tmp/tasks",
            "todoist://",
        ] {
            assert_eq!(TodoistUri::parse(uri), None, "{}", uri);
        }
    }

    #[test]
    fn test_listings() {
        let resources = list_resources();
        let uris: Vec<&str> = resources.iter().map(|r| r.uri.as_str()).collect();
        assert_eq!(uris, vec!["todoist://projects", "todoist://tasks"]);

        let templates = list_resource_templates().unwrap();
        assert_eq!(templates.len(), 2);
        assert_eq!(templates[0].uri_template, "todoist://projects/{id}");
    }
}

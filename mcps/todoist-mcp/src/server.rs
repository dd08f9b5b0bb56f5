//! MCP Server implementation for Todoist
//!
//! This module defines the main MCP server that exposes Todoist operations as
//! tools and read-only resources. Handler implementations are in the handlers
//! module.

use std::sync::Arc;

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{
        CallToolResult, ListResourceTemplatesResult, ListResourcesResult, PaginatedRequestParam,
        ReadResourceRequestParam, ReadResourceResult, ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
    tool, tool_handler, tool_router, ErrorData as McpError, RoleServer,
};

use crate::client::TodoistClient;
use crate::handlers;
use crate::params::*;

/// The main Todoist MCP Server
#[derive(Clone)]
pub struct TodoistMcpServer {
    client: Arc<TodoistClient>,
    tool_router: ToolRouter<Self>,
}

// ============================================================================
// Tool Router - Each tool delegates to its handler
// ============================================================================

#[tool_router]
impl TodoistMcpServer {
    pub fn new(client: Arc<TodoistClient>) -> Self {
        Self {
            client,
            tool_router: Self::tool_router(),
        }
    }

    // ========================================================================
    // Projects
    // ========================================================================

    #[tool(
        description = "Create a new Todoist project with customizable settings. Allows you to set up a project with a specific name, hierarchy (by assigning a parent), color, favorite status, and view style (list, board, or calendar). Returns the complete project object upon successful creation."
    )]
    async fn create_project(
        &self,
        Parameters(params): Parameters<CreateProjectParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::create_project(&self.client, params).await
    }

    #[tool(
        description = "Modify the properties of an existing Todoist project: name, color, favorite status, and view style. All parameters except the project ID are optional; only the supplied properties change. Returns the updated project object."
    )]
    async fn update_project(
        &self,
        Parameters(params): Parameters<UpdateProjectParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::update_project(&self.client, params).await
    }

    #[tool(
        description = "Permanently delete a Todoist project by its unique identifier, including all of its tasks, sections, and comments. This cannot be undone. Returns confirmation of deletion or failure."
    )]
    async fn delete_project(
        &self,
        Parameters(params): Parameters<DeleteProjectParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::delete_project(&self.client, params).await
    }

    #[tool(
        description = "Retrieve all Todoist projects accessible to the authenticated user, including personal and workspace projects with name, color, favorite status, view style, and hierarchy information. Handles pagination automatically."
    )]
    async fn get_projects(
        &self,
        Parameters(_): Parameters<EmptyParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::get_projects(&self.client).await
    }

    #[tool(
        description = "Access detailed information for a specific Todoist project using its unique identifier."
    )]
    async fn get_project(
        &self,
        Parameters(params): Parameters<GetProjectParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::get_project(&self.client, params).await
    }

    // ========================================================================
    // Sections
    // ========================================================================

    #[tool(
        description = "Create a new section within a Todoist project to organize tasks. Optionally specify the order to control where the section appears. Returns the complete section object."
    )]
    async fn create_section(
        &self,
        Parameters(params): Parameters<CreateSectionParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::create_section(&self.client, params).await
    }

    #[tool(
        description = "Rename an existing Todoist section. The section keeps its position, project, and tasks. Returns the updated section object."
    )]
    async fn update_section(
        &self,
        Parameters(params): Parameters<UpdateSectionParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::update_section(&self.client, params).await
    }

    #[tool(
        description = "Permanently delete a Todoist section by its unique identifier. Tasks in the section move to the project's main area. This cannot be undone."
    )]
    async fn delete_section(
        &self,
        Parameters(params): Parameters<DeleteSectionParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::delete_section(&self.client, params).await
    }

    #[tool(
        description = "Retrieve all sections within a specific Todoist project, in display order. Handles pagination automatically."
    )]
    async fn get_sections(
        &self,
        Parameters(params): Parameters<GetSectionsParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::get_sections(&self.client, params).await
    }

    #[tool(
        description = "Access detailed information for a specific Todoist section using its unique identifier."
    )]
    async fn get_section(
        &self,
        Parameters(params): Parameters<GetSectionParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::get_section(&self.client, params).await
    }

    // ========================================================================
    // Tasks
    // ========================================================================

    #[tool(
        description = "Create a new Todoist task. Supports content, description, project and section assignment, subtasks via parentId, priority (1=normal to 4=urgent), natural language or absolute due dates, labels, duration estimates, and assignees. When both dueDate and dueDatetime are given, dueDatetime wins. Returns the created task."
    )]
    async fn create_task(
        &self,
        Parameters(params): Parameters<CreateTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::create_task(&self.client, params).await
    }

    #[tool(
        description = "Modify an existing Todoist task: content, description, labels, priority, due dates, assignee, and duration. All parameters except the task ID are optional; only the supplied properties change. Returns the updated task."
    )]
    async fn update_task(
        &self,
        Parameters(params): Parameters<UpdateTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::update_task(&self.client, params).await
    }

    #[tool(
        description = "Permanently delete a Todoist task by its unique identifier, including its subtasks and comments. This cannot be undone."
    )]
    async fn delete_task(
        &self,
        Parameters(params): Parameters<DeleteTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::delete_task(&self.client, params).await
    }

    #[tool(
        description = "Mark a Todoist task as completed. Completed tasks keep their data and can be reopened later."
    )]
    async fn close_task(
        &self,
        Parameters(params): Parameters<CloseTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::close_task(&self.client, params).await
    }

    #[tool(
        description = "Reopen a previously completed Todoist task, returning it to active status. Returns the reopened task."
    )]
    async fn reopen_task(
        &self,
        Parameters(params): Parameters<ReopenTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::reopen_task(&self.client, params).await
    }

    #[tool(
        description = "Retrieve Todoist tasks, optionally filtered by project, section, label, or a list of IDs, or selected with a custom Todoist filter query. Without filters, returns all active tasks. Handles pagination automatically."
    )]
    async fn get_tasks(
        &self,
        Parameters(params): Parameters<GetTasksParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::get_tasks(&self.client, params).await
    }

    #[tool(
        description = "Access detailed information for a specific Todoist task using its unique identifier."
    )]
    async fn get_task(
        &self,
        Parameters(params): Parameters<GetTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::get_task(&self.client, params).await
    }

    #[tool(
        description = "Move one or more Todoist tasks to a project, a section, or under a parent task. Exactly one of projectId, sectionId, or parentId must be given. Returns the moved tasks."
    )]
    async fn move_tasks(
        &self,
        Parameters(params): Parameters<MoveTasksParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::move_tasks(&self.client, params).await
    }

    #[tool(
        description = "Create a task using Todoist's natural language parsing. Free-form text is parsed for due dates ('tomorrow', 'next Monday at 2pm'), projects (#Work), labels (@urgent), priorities (p1 to p4), and assignees (+email). Returns the created task."
    )]
    async fn quick_add_task(
        &self,
        Parameters(params): Parameters<QuickAddTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::quick_add_task(&self.client, params).await
    }

    // ========================================================================
    // Labels
    // ========================================================================

    #[tool(
        description = "Create a new personal label with name, color, display order, and favorite status. Returns the created label."
    )]
    async fn create_label(
        &self,
        Parameters(params): Parameters<CreateLabelParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::create_label(&self.client, params).await
    }

    #[tool(
        description = "Modify a personal label. All parameters except the label ID are optional. Returns the updated label."
    )]
    async fn update_label(
        &self,
        Parameters(params): Parameters<UpdateLabelParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::update_label(&self.client, params).await
    }

    #[tool(
        description = "Permanently delete a personal label. The label is removed from all tasks carrying it."
    )]
    async fn delete_label(
        &self,
        Parameters(params): Parameters<DeleteLabelParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::delete_label(&self.client, params).await
    }

    #[tool(
        description = "Retrieve all personal labels of the authenticated user with name, color, order, and favorite status. Handles pagination automatically."
    )]
    async fn get_labels(
        &self,
        Parameters(_): Parameters<EmptyParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::get_labels(&self.client).await
    }

    #[tool(description = "Access a single personal label by its unique identifier.")]
    async fn get_label(
        &self,
        Parameters(params): Parameters<GetLabelParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::get_label(&self.client, params).await
    }

    // ========================================================================
    // Comments
    // ========================================================================

    #[tool(
        description = "Add a comment to a Todoist task or project, with an optional file attachment. Specify either taskId or projectId, but not both. Returns the created comment."
    )]
    async fn create_comment(
        &self,
        Parameters(params): Parameters<CreateCommentParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::create_comment(&self.client, params).await
    }

    #[tool(description = "Replace the text content of an existing comment. Returns the updated comment.")]
    async fn update_comment(
        &self,
        Parameters(params): Parameters<UpdateCommentParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::update_comment(&self.client, params).await
    }

    #[tool(
        description = "Permanently delete a comment by its unique identifier. This cannot be undone."
    )]
    async fn delete_comment(
        &self,
        Parameters(params): Parameters<DeleteCommentParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::delete_comment(&self.client, params).await
    }

    #[tool(
        description = "Retrieve all comments on a specific Todoist task in chronological order, including attachments. Handles pagination automatically."
    )]
    async fn get_task_comments(
        &self,
        Parameters(params): Parameters<GetTaskCommentsParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::get_task_comments(&self.client, params).await
    }

    #[tool(
        description = "Retrieve all comments on a specific Todoist project in chronological order, including attachments. Handles pagination automatically."
    )]
    async fn get_project_comments(
        &self,
        Parameters(params): Parameters<GetProjectCommentsParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::get_project_comments(&self.client, params).await
    }
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

#[tool_handler]
impl rmcp::ServerHandler for TodoistMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Todoist MCP server for projects, sections, tasks, labels and comments. \
                 List tools return every item, following pagination to the end. \
                 Resources todoist://projects and todoist://tasks expose the same data read-only."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            ..Default::default()
        }
    }

    async fn list_resources(
        &self,
        _pagination: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        Ok(ListResourcesResult::with_all_items(
            handlers::list_resources(),
        ))
    }

    async fn list_resource_templates(
        &self,
        _pagination: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, McpError> {
        Ok(ListResourceTemplatesResult::with_all_items(
            handlers::list_resource_templates()?,
        ))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        handlers::read_resource(&self.client, &request.uri).await
    }
}

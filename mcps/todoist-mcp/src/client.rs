//! Todoist client facade
//!
//! Wraps a [`TodoistApi`] and gives the handlers what they actually want:
//! whole collections instead of pages, task payloads with their due fields
//! reconciled, and shape checks that fail before anything is sent.

use std::sync::Arc;

use tracing::debug;

use crate::todoist::types::*;
use crate::todoist::{fetch_all, TodoistApi, TodoistError, TodoistResult};

/// Keep `due_datetime` and drop `due_date` when both are set
///
/// The API refuses payloads carrying both; the more precise value wins.
fn reconcile_due(due_date: &mut Option<String>, due_datetime: &Option<String>) {
    if due_datetime.is_some() && due_date.take().is_some() {
        debug!("both due_date and due_datetime given, keeping due_datetime");
    }
}

/// Facade over the remote Todoist API, built once at startup
#[derive(Clone)]
pub struct TodoistClient {
    api: Arc<dyn TodoistApi>,
}

impl TodoistClient {
    pub fn new(api: Arc<dyn TodoistApi>) -> Self {
        Self { api }
    }

    // ========================================================================
    // Projects
    // ========================================================================

    pub async fn get_projects(&self) -> TodoistResult<Vec<Project>> {
        fetch_all("projects", |cursor| self.api.get_projects(cursor)).await
    }

    pub async fn get_project(&self, id: &str) -> TodoistResult<Project> {
        self.api.get_project(id).await
    }

    pub async fn create_project(&self, args: AddProjectArgs) -> TodoistResult<Project> {
        self.api.add_project(&args).await
    }

    pub async fn update_project(
        &self,
        id: &str,
        args: UpdateProjectArgs,
    ) -> TodoistResult<Project> {
        self.api.update_project(id, &args).await
    }

    pub async fn delete_project(&self, id: &str) -> TodoistResult<bool> {
        self.api.delete_project(id).await
    }

    // ========================================================================
    // Tasks
    // ========================================================================

    /// All tasks matching `filter`; the filter is resent with every page
    pub async fn get_tasks(&self, filter: TaskFilter) -> TodoistResult<Vec<Task>> {
        fetch_all("tasks", |cursor| self.api.get_tasks(&filter, cursor)).await
    }

    pub async fn get_task(&self, id: &str) -> TodoistResult<Task> {
        self.api.get_task(id).await
    }

    pub async fn create_task(&self, mut args: AddTaskArgs) -> TodoistResult<Task> {
        reconcile_due(&mut args.due_date, &args.due_datetime);
        self.api.add_task(&args).await
    }

    pub async fn update_task(&self, id: &str, mut args: UpdateTaskArgs) -> TodoistResult<Task> {
        reconcile_due(&mut args.due_date, &args.due_datetime);
        self.api.update_task(id, &args).await
    }

    pub async fn delete_task(&self, id: &str) -> TodoistResult<bool> {
        self.api.delete_task(id).await
    }

    pub async fn close_task(&self, id: &str) -> TodoistResult<bool> {
        self.api.close_task(id).await
    }

    pub async fn reopen_task(&self, id: &str) -> TodoistResult<bool> {
        self.api.reopen_task(id).await
    }

    /// Move tasks to exactly one of a project, a section or a parent task
    pub async fn move_tasks(
        &self,
        ids: Vec<String>,
        project_id: Option<String>,
        section_id: Option<String>,
        parent_id: Option<String>,
    ) -> TodoistResult<Vec<Task>> {
        let destination = MoveDestination::exactly_one(project_id, section_id, parent_id)?;
        if ids.is_empty() {
            return Err(TodoistError::invalid("At least one task ID must be given"));
        }
        self.api.move_tasks(&ids, &destination).await
    }

    pub async fn quick_add_task(&self, args: QuickAddArgs) -> TodoistResult<Task> {
        self.api.quick_add_task(&args).await
    }

    // ========================================================================
    // Sections
    // ========================================================================

    pub async fn get_sections(&self, project_id: &str) -> TodoistResult<Vec<Section>> {
        fetch_all("sections", |cursor| self.api.get_sections(project_id, cursor)).await
    }

    pub async fn get_section(&self, id: &str) -> TodoistResult<Section> {
        self.api.get_section(id).await
    }

    pub async fn create_section(&self, args: AddSectionArgs) -> TodoistResult<Section> {
        self.api.add_section(&args).await
    }

    pub async fn update_section(
        &self,
        id: &str,
        args: UpdateSectionArgs,
    ) -> TodoistResult<Section> {
        self.api.update_section(id, &args).await
    }

    pub async fn delete_section(&self, id: &str) -> TodoistResult<bool> {
        self.api.delete_section(id).await
    }

    // ========================================================================
    // Labels
    // ========================================================================

    pub async fn get_labels(&self) -> TodoistResult<Vec<Label>> {
        fetch_all("labels", |cursor| self.api.get_labels(cursor)).await
    }

    pub async fn get_label(&self, id: &str) -> TodoistResult<Label> {
        self.api.get_label(id).await
    }

    pub async fn create_label(&self, args: AddLabelArgs) -> TodoistResult<Label> {
        self.api.add_label(&args).await
    }

    pub async fn update_label(&self, id: &str, args: UpdateLabelArgs) -> TodoistResult<Label> {
        self.api.update_label(id, &args).await
    }

    pub async fn delete_label(&self, id: &str) -> TodoistResult<bool> {
        self.api.delete_label(id).await
    }

    // ========================================================================
    // Comments
    // ========================================================================

    /// Comment on exactly one of a task or a project
    pub async fn create_comment(
        &self,
        content: String,
        task_id: Option<String>,
        project_id: Option<String>,
        attachment: Option<Attachment>,
    ) -> TodoistResult<Comment> {
        let target = CommentTarget::exactly_one(task_id, project_id)?;
        if attachment
            .as_ref()
            .is_some_and(|a| a.file_url.trim().is_empty())
        {
            return Err(TodoistError::invalid(
                "fileUrl is required when attachment is provided",
            ));
        }

        let args = AddCommentArgs {
            content,
            target,
            attachment,
        };
        self.api.add_comment(&args).await
    }

    pub async fn get_task_comments(&self, task_id: &str) -> TodoistResult<Vec<Comment>> {
        let target = CommentTarget::Task(task_id.to_string());
        fetch_all("task comments", |cursor| self.api.get_comments(&target, cursor)).await
    }

    pub async fn get_project_comments(&self, project_id: &str) -> TodoistResult<Vec<Comment>> {
        let target = CommentTarget::Project(project_id.to_string());
        fetch_all("project comments", |cursor| {
            self.api.get_comments(&target, cursor)
        })
        .await
    }

    pub async fn update_comment(&self, id: &str, content: String) -> TodoistResult<Comment> {
        self.api
            .update_comment(id, &UpdateCommentArgs { content })
            .await
    }

    pub async fn delete_comment(&self, id: &str) -> TodoistResult<bool> {
        self.api.delete_comment(id).await
    }
}

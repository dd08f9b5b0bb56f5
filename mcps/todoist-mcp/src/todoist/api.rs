//! Remote Todoist API
//!
//! [`TodoistApi`] is the minimal surface the server needs from Todoist: the
//! same list/get/create/update/delete verbs for every resource plus a few
//! task-specific ones. [`RestApi`] implements it against the REST API v1.

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, instrument, warn};
use url::Url;

use super::error::{TodoistError, TodoistResult};
use super::pagination::{fetch_all, Page};
use super::types::*;

/// Default REST endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.todoist.com/api/v1";

/// Largest page the API will return
pub const MAX_PAGE_SIZE: u32 = 200;

/// Operations against the remote Todoist service
///
/// List methods return a single [`Page`]; `cursor` is `None` for the first
/// page. Deletion and state changes report `true` on success.
#[async_trait]
pub trait TodoistApi: Send + Sync {
    // Projects
    async fn get_projects(&self, cursor: Option<String>) -> TodoistResult<Page<Project>>;
    async fn get_project(&self, id: &str) -> TodoistResult<Project>;
    async fn add_project(&self, args: &AddProjectArgs) -> TodoistResult<Project>;
    async fn update_project(&self, id: &str, args: &UpdateProjectArgs) -> TodoistResult<Project>;
    async fn delete_project(&self, id: &str) -> TodoistResult<bool>;

    // Tasks
    async fn get_tasks(
        &self,
        filter: &TaskFilter,
        cursor: Option<String>,
    ) -> TodoistResult<Page<Task>>;
    async fn get_task(&self, id: &str) -> TodoistResult<Task>;
    async fn add_task(&self, args: &AddTaskArgs) -> TodoistResult<Task>;
    async fn update_task(&self, id: &str, args: &UpdateTaskArgs) -> TodoistResult<Task>;
    async fn delete_task(&self, id: &str) -> TodoistResult<bool>;
    async fn close_task(&self, id: &str) -> TodoistResult<bool>;
    async fn reopen_task(&self, id: &str) -> TodoistResult<bool>;
    /// Returns the moved tasks in the order of `ids`. Tasks the active listing
    /// no longer returns, such as completed ones, are missing from the result.
    async fn move_tasks(
        &self,
        ids: &[String],
        destination: &MoveDestination,
    ) -> TodoistResult<Vec<Task>>;
    async fn quick_add_task(&self, args: &QuickAddArgs) -> TodoistResult<Task>;

    // Sections
    async fn get_sections(
        &self,
        project_id: &str,
        cursor: Option<String>,
    ) -> TodoistResult<Page<Section>>;
    async fn get_section(&self, id: &str) -> TodoistResult<Section>;
    async fn add_section(&self, args: &AddSectionArgs) -> TodoistResult<Section>;
    async fn update_section(&self, id: &str, args: &UpdateSectionArgs) -> TodoistResult<Section>;
    async fn delete_section(&self, id: &str) -> TodoistResult<bool>;

    // Labels
    async fn get_labels(&self, cursor: Option<String>) -> TodoistResult<Page<Label>>;
    async fn get_label(&self, id: &str) -> TodoistResult<Label>;
    async fn add_label(&self, args: &AddLabelArgs) -> TodoistResult<Label>;
    async fn update_label(&self, id: &str, args: &UpdateLabelArgs) -> TodoistResult<Label>;
    async fn delete_label(&self, id: &str) -> TodoistResult<bool>;

    // Comments
    async fn get_comments(
        &self,
        target: &CommentTarget,
        cursor: Option<String>,
    ) -> TodoistResult<Page<Comment>>;
    async fn add_comment(&self, args: &AddCommentArgs) -> TodoistResult<Comment>;
    async fn update_comment(&self, id: &str, args: &UpdateCommentArgs) -> TodoistResult<Comment>;
    async fn delete_comment(&self, id: &str) -> TodoistResult<bool>;
}

/// Todoist REST API v1 client
pub struct RestApi {
    client: Client,
    base_url: Url,
    token: String,
    page_size: u32,
}

type Query<'a> = Vec<(&'static str, &'a str)>;

impl RestApi {
    /// Build a client for `base_url` authenticating with `token`
    ///
    /// `page_size` is clamped to 1..=[`MAX_PAGE_SIZE`].
    pub fn new(base_url: Url, token: impl Into<String>, page_size: u32) -> TodoistResult<Self> {
        if base_url.cannot_be_a_base() {
            return Err(TodoistError::invalid(format!(
                "Todoist base URL cannot have paths appended: {}",
                base_url
            )));
        }

        let client = Client::builder()
            .user_agent(concat!("todoist-mcp/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url,
            token: token.into(),
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
        })
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn request(&self, method: Method, segments: &[&str]) -> RequestBuilder {
        self.client
            .request(method, self.endpoint(segments))
            .bearer_auth(&self.token)
    }

    /// Send a request and turn non-success statuses into [`TodoistError::Api`]
    async fn send(&self, request: RequestBuilder) -> TodoistResult<Response> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        warn!(status = status.as_u16(), body = %body, "todoist request rejected");
        Err(TodoistError::Api {
            status: status.as_u16(),
            body,
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> TodoistResult<T> {
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> TodoistResult<T> {
        let response = self
            .send(self.request(Method::GET, segments).query(query))
            .await?;
        Self::decode(response).await
    }

    async fn post_json<B, T>(&self, segments: &[&str], body: &B) -> TodoistResult<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let response = self
            .send(self.request(Method::POST, segments).json(body))
            .await?;
        Self::decode(response).await
    }

    /// POST without a body whose response content is not needed
    async fn post_no_content(&self, segments: &[&str]) -> TodoistResult<bool> {
        self.send(self.request(Method::POST, segments)).await?;
        Ok(true)
    }

    async fn delete(&self, segments: &[&str]) -> TodoistResult<bool> {
        self.send(self.request(Method::DELETE, segments)).await?;
        Ok(true)
    }

    async fn get_page<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        filters: Query<'_>,
        cursor: Option<&str>,
    ) -> TodoistResult<Page<T>> {
        let limit = self.page_size.to_string();
        let mut query: Vec<(&str, &str)> = filters;
        query.push(("limit", &limit));
        if let Some(cursor) = cursor {
            query.push(("cursor", cursor));
        }
        self.get_json(segments, &query).await
    }
}

#[async_trait]
impl TodoistApi for RestApi {
    #[instrument(skip(self))]
    async fn get_projects(&self, cursor: Option<String>) -> TodoistResult<Page<Project>> {
        self.get_page(&["projects"], Vec::new(), cursor.as_deref()).await
    }

    #[instrument(skip(self))]
    async fn get_project(&self, id: &str) -> TodoistResult<Project> {
        self.get_json(&["projects", id], &[]).await
    }

    #[instrument(skip(self, args), fields(name = %args.name))]
    async fn add_project(&self, args: &AddProjectArgs) -> TodoistResult<Project> {
        self.post_json(&["projects"], args).await
    }

    #[instrument(skip(self, args))]
    async fn update_project(&self, id: &str, args: &UpdateProjectArgs) -> TodoistResult<Project> {
        self.post_json(&["projects", id], args).await
    }

    #[instrument(skip(self))]
    async fn delete_project(&self, id: &str) -> TodoistResult<bool> {
        self.delete(&["projects", id]).await
    }

    #[instrument(skip(self))]
    async fn get_tasks(
        &self,
        filter: &TaskFilter,
        cursor: Option<String>,
    ) -> TodoistResult<Page<Task>> {
        let mut query: Query<'_> = Vec::new();

        if let Some(expression) = filter.query_expression() {
            query.push(("query", expression));
            if let Some(lang) = filter.lang.as_deref() {
                query.push(("lang", lang));
            }
            return self
                .get_page(&["tasks", "filter"], query, cursor.as_deref())
                .await;
        }

        let ids = filter
            .ids
            .as_ref()
            .filter(|ids| !ids.is_empty())
            .map(|ids| ids.join(","));
        if let Some(project_id) = filter.project_id.as_deref() {
            query.push(("project_id", project_id));
        }
        if let Some(section_id) = filter.section_id.as_deref() {
            query.push(("section_id", section_id));
        }
        if let Some(label) = filter.label.as_deref() {
            query.push(("label", label));
        }
        if let Some(ids) = ids.as_deref() {
            query.push(("ids", ids));
        }
        self.get_page(&["tasks"], query, cursor.as_deref()).await
    }

    #[instrument(skip(self))]
    async fn get_task(&self, id: &str) -> TodoistResult<Task> {
        self.get_json(&["tasks", id], &[]).await
    }

    #[instrument(skip(self, args))]
    async fn add_task(&self, args: &AddTaskArgs) -> TodoistResult<Task> {
        self.post_json(&["tasks"], args).await
    }

    #[instrument(skip(self, args))]
    async fn update_task(&self, id: &str, args: &UpdateTaskArgs) -> TodoistResult<Task> {
        self.post_json(&["tasks", id], args).await
    }

    #[instrument(skip(self))]
    async fn delete_task(&self, id: &str) -> TodoistResult<bool> {
        self.delete(&["tasks", id]).await
    }

    #[instrument(skip(self))]
    async fn close_task(&self, id: &str) -> TodoistResult<bool> {
        self.post_no_content(&["tasks", id, "close"]).await
    }

    #[instrument(skip(self))]
    async fn reopen_task(&self, id: &str) -> TodoistResult<bool> {
        self.post_no_content(&["tasks", id, "reopen"]).await
    }

    /// Moves one task per request, in order, then reads the moved tasks back in
    /// the order of `ids`
    #[instrument(skip(self), fields(count = ids.len()))]
    async fn move_tasks(
        &self,
        ids: &[String],
        destination: &MoveDestination,
    ) -> TodoistResult<Vec<Task>> {
        for id in ids {
            debug!(task_id = %id, "moving task");
            self.send(
                self.request(Method::POST, &["tasks", id.as_str(), "move"])
                    .json(destination),
            )
            .await?;
        }

        let moved = TaskFilter {
            ids: Some(ids.to_vec()),
            ..Default::default()
        };
        let mut tasks = fetch_all("moved tasks", |cursor| self.get_tasks(&moved, cursor)).await?;
        tasks.sort_by_key(|task| ids.iter().position(|id| *id == task.id));
        Ok(tasks)
    }

    #[instrument(skip(self, args))]
    async fn quick_add_task(&self, args: &QuickAddArgs) -> TodoistResult<Task> {
        self.post_json(&["tasks", "quick"], args).await
    }

    #[instrument(skip(self))]
    async fn get_sections(
        &self,
        project_id: &str,
        cursor: Option<String>,
    ) -> TodoistResult<Page<Section>> {
        self.get_page(
            &["sections"],
            vec![("project_id", project_id)],
            cursor.as_deref(),
        )
        .await
    }

    #[instrument(skip(self))]
    async fn get_section(&self, id: &str) -> TodoistResult<Section> {
        self.get_json(&["sections", id], &[]).await
    }

    #[instrument(skip(self, args), fields(name = %args.name))]
    async fn add_section(&self, args: &AddSectionArgs) -> TodoistResult<Section> {
        self.post_json(&["sections"], args).await
    }

    #[instrument(skip(self, args))]
    async fn update_section(&self, id: &str, args: &UpdateSectionArgs) -> TodoistResult<Section> {
        self.post_json(&["sections", id], args).await
    }

    #[instrument(skip(self))]
    async fn delete_section(&self, id: &str) -> TodoistResult<bool> {
        self.delete(&["sections", id]).await
    }

    #[instrument(skip(self))]
    async fn get_labels(&self, cursor: Option<String>) -> TodoistResult<Page<Label>> {
        self.get_page(&["labels"], Vec::new(), cursor.as_deref()).await
    }

    #[instrument(skip(self))]
    async fn get_label(&self, id: &str) -> TodoistResult<Label> {
        self.get_json(&["labels", id], &[]).await
    }

    #[instrument(skip(self, args), fields(name = %args.name))]
    async fn add_label(&self, args: &AddLabelArgs) -> TodoistResult<Label> {
        self.post_json(&["labels"], args).await
    }

    #[instrument(skip(self, args))]
    async fn update_label(&self, id: &str, args: &UpdateLabelArgs) -> TodoistResult<Label> {
        self.post_json(&["labels", id], args).await
    }

    #[instrument(skip(self))]
    async fn delete_label(&self, id: &str) -> TodoistResult<bool> {
        self.delete(&["labels", id]).await
    }

    #[instrument(skip(self))]
    async fn get_comments(
        &self,
        target: &CommentTarget,
        cursor: Option<String>,
    ) -> TodoistResult<Page<Comment>> {
        self.get_page(&["comments"], vec![target.query_pair()], cursor.as_deref())
            .await
    }

    #[instrument(skip(self, args))]
    async fn add_comment(&self, args: &AddCommentArgs) -> TodoistResult<Comment> {
        self.post_json(&["comments"], args).await
    }

    #[instrument(skip(self, args))]
    async fn update_comment(&self, id: &str, args: &UpdateCommentArgs) -> TodoistResult<Comment> {
        self.post_json(&["comments", id], args).await
    }

    #[instrument(skip(self))]
    async fn delete_comment(&self, id: &str) -> TodoistResult<bool> {
        self.delete(&["comments", id]).await
    }
}

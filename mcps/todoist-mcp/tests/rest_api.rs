//! RestApi against a mock Todoist server

use std::sync::Arc;

use serde_json::json;
use url::Url;
use wiremock::matchers::{
    body_json, header, method, path, path_regex, query_param, query_param_is_missing,
};
use wiremock::{Mock, MockServer, ResponseTemplate};

use todoist_mcp::todoist::types::{AddTaskArgs, TaskFilter};
use todoist_mcp::{RestApi, TodoistApi, TodoistClient, TodoistError};

fn rest_api(server: &MockServer, page_size: u32) -> RestApi {
    let base = Url::parse(&format!("{}/api/v1", server.uri())).unwrap();
    RestApi::new(base, "test-token", page_size).unwrap()
}

fn client(server: &MockServer, page_size: u32) -> TodoistClient {
    TodoistClient::new(Arc::new(rest_api(server, page_size)))
}

#[tokio::test]
async fn test_projects_follow_cursor_with_auth() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/projects"))
        .and(header("authorization", "Bearer test-token"))
        .and(query_param("limit", "2"))
        .and(query_param_is_missing("cursor"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                {"id": "p1", "name": "Inbox", "inbox_project": true},
                {"id": "p2", "name": "Work"}
            ],
            "next_cursor": "c1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/projects"))
        .and(header("authorization", "Bearer test-token"))
        .and(query_param("limit", "2"))
        .and(query_param("cursor", "c1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"id": "p3", "name": "Home"}],
            "next_cursor": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let projects = client(&server, 2).get_projects().await.unwrap();

    let names: Vec<&str> = projects.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Inbox", "Work", "Home"]);
    assert_eq!(projects[0].extra.get("inbox_project"), Some(&json!(true)));
}

#[tokio::test]
async fn test_filter_expression_uses_filter_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/tasks/filter"))
        .and(query_param("query", "today & p1"))
        .and(query_param("lang", "en"))
        .and(query_param_is_missing("project_id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"id": "t1", "content": "Ship it", "priority": 4}],
            "next_cursor": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let filter = TaskFilter {
        filter: Some("today & p1".to_string()),
        lang: Some("en".to_string()),
        project_id: Some("ignored".to_string()),
        ..Default::default()
    };
    let tasks = client(&server, 50).get_tasks(filter).await.unwrap();

    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].priority, Some(4));
}

#[tokio::test]
async fn test_plain_listing_sends_filters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/tasks"))
        .and(query_param("project_id", "p1"))
        .and(query_param("label", "errand"))
        .and(query_param("ids", "t1,t2"))
        .and(query_param("limit", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [],
            "next_cursor": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let filter = TaskFilter {
        project_id: Some("p1".to_string()),
        label: Some("errand".to_string()),
        ids: Some(vec!["t1".to_string(), "t2".to_string()]),
        ..Default::default()
    };
    let tasks = client(&server, 50).get_tasks(filter).await.unwrap();

    assert!(tasks.is_empty());
}

#[tokio::test]
async fn test_empty_id_list_is_not_sent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/tasks"))
        .and(query_param_is_missing("ids"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"id": "t1", "content": "One"}],
            "next_cursor": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let filter = TaskFilter {
        ids: Some(Vec::new()),
        ..Default::default()
    };
    let tasks = client(&server, 50).get_tasks(filter).await.unwrap();

    assert_eq!(tasks.len(), 1);
}

#[tokio::test]
async fn test_non_success_status_becomes_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/tasks/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Task not found"))
        .mount(&server)
        .await;

    let err = rest_api(&server, 50).get_task("missing").await.unwrap_err();

    match err {
        TodoistError::Api { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body, "Task not found");
        }
        other => panic!("expected API error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_failed_second_page_fails_listing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/labels"))
        .and(query_param_is_missing("cursor"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"id": "l1", "name": "errand"}],
            "next_cursor": "c1"
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/labels"))
        .and(query_param("cursor", "c1"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client(&server, 50).get_labels().await.unwrap_err();

    assert!(matches!(err, TodoistError::Api { status: 500, .. }));
}

#[tokio::test]
async fn test_create_task_sends_reconciled_payload() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/tasks"))
        .and(body_json(json!({
            "content": "Standup",
            "due_datetime": "2024-05-01T09:00:00Z"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "t9",
            "content": "Standup",
            "due": {"date": "2024-05-01", "datetime": "2024-05-01T09:00:00Z", "is_recurring": false}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let task = client(&server, 50)
        .create_task(AddTaskArgs {
            content: "Standup".to_string(),
            due_date: Some("2024-05-01".to_string()),
            due_datetime: Some("2024-05-01T09:00:00Z".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(task.id, "t9");
}

#[tokio::test]
async fn test_state_changes_report_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/tasks/t1/close"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/comments/c1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let api = rest_api(&server, 50);
    assert!(api.close_task("t1").await.unwrap());
    assert!(api.delete_comment("c1").await.unwrap());
}

#[tokio::test]
async fn test_move_posts_each_task_then_reads_back() {
    let server = MockServer::start().await;

    for id in ["t1", "t2"] {
        Mock::given(method("POST"))
            .and(path(format!("/api/v1/tasks/{}/move", id)))
            .and(body_json(json!({"section_id": "s1"})))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;
    }

    Mock::given(method("GET"))
        .and(path("/api/v1/tasks"))
        .and(query_param("ids", "t1,t2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                {"id": "t1", "content": "One", "section_id": "s1"},
                {"id": "t2", "content": "Two", "section_id": "s1"}
            ],
            "next_cursor": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let moved = client(&server, 50)
        .move_tasks(
            vec!["t1".to_string(), "t2".to_string()],
            None,
            Some("s1".to_string()),
            None,
        )
        .await
        .unwrap();

    assert!(moved
        .iter()
        .all(|t| t.section_id.as_deref() == Some("s1")));
}

#[tokio::test]
async fn test_comment_payload_carries_single_target() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/comments"))
        .and(body_json(json!({
            "content": "See attached",
            "task_id": "t1",
            "attachment": {"file_url": "https://example.com/a.pdf", "file_type": "application/pdf"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "c1",
            "content": "See attached",
            "task_id": "t1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let comment = client(&server, 50)
        .create_comment(
            "See attached".to_string(),
            Some("t1".to_string()),
            None,
            Some(todoist_mcp::todoist::types::Attachment {
                file_url: "https://example.com/a.pdf".to_string(),
                file_type: Some("application/pdf".to_string()),
                ..Default::default()
            }),
        )
        .await
        .unwrap();

    assert_eq!(comment.task_id.as_deref(), Some("t1"));
}

#[tokio::test]
async fn test_moved_tasks_keep_caller_order() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path_regex(r"^/api/v1/tasks/t[0-9]/move$"))
        .respond_with(ResponseTemplate::new(204))
        .expect(3)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/tasks"))
        .and(query_param("ids", "t3,t1,t2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                {"id": "t1", "content": "One", "project_id": "p2"},
                {"id": "t2", "content": "Two", "project_id": "p2"},
                {"id": "t3", "content": "Three", "project_id": "p2"}
            ],
            "next_cursor": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let moved = client(&server, 50)
        .move_tasks(
            vec!["t3".to_string(), "t1".to_string(), "t2".to_string()],
            Some("p2".to_string()),
            None,
            None,
        )
        .await
        .unwrap();

    let ids: Vec<&str> = moved.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["t3", "t1", "t2"]);
}

//! Task CRUD contract against a mocked backend.

use api::tasks::{self, TaskStatus, TaskUpdate};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;
use common::test_client;

fn task_json(id: &str, status: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": "Buy milk",
        "status": status,
        "created_at": "2025-01-01T00:00:00Z",
        "updated_at": "2025-01-01T00:00:00Z",
        "user_id": "u1"
    })
}

#[tokio::test]
async fn test_empty_list_yields_empty_vec() {
    let server = MockServer::start().await;
    let client = test_client(&server);

    Mock::given(method("GET"))
        .and(path("/api/todos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"todos": []})))
        .mount(&server)
        .await;

    let list = tasks::list_tasks(&client).await.unwrap();
    assert!(list.is_empty());
}

#[tokio::test]
async fn test_create_sends_completed_false_and_omits_empty_description() {
    let server = MockServer::start().await;
    let client = test_client(&server);

    Mock::given(method("POST"))
        .and(path("/api/todos"))
        .and(body_json(
            serde_json::json!({"title": "Buy milk", "completed": false}),
        ))
        .respond_with(ResponseTemplate::new(201).set_body_json(task_json("t1", "pending")))
        .expect(1)
        .mount(&server)
        .await;

    let task = tasks::create_task(&client, "Buy milk", None).await.unwrap();
    assert_eq!(task.id, "t1");
    assert_eq!(task.status, TaskStatus::Pending);
}

#[tokio::test]
async fn test_update_sends_only_provided_fields() {
    let server = MockServer::start().await;
    let client = test_client(&server);

    Mock::given(method("PUT"))
        .and(path("/api/todos/t1"))
        .and(body_json(serde_json::json!({"title": "Buy oat milk"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(task_json("t1", "pending")))
        .expect(1)
        .mount(&server)
        .await;

    let update = TaskUpdate {
        title: Some("Buy oat milk".to_string()),
        ..TaskUpdate::default()
    };
    tasks::update_task(&client, "t1", &update).await.unwrap();
}

#[tokio::test]
async fn test_update_maps_status_to_completed_bool() {
    let server = MockServer::start().await;
    let client = test_client(&server);

    Mock::given(method("PUT"))
        .and(path("/api/todos/t1"))
        .and(body_json(serde_json::json!({"completed": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(task_json("t1", "completed")))
        .expect(1)
        .mount(&server)
        .await;

    let update = TaskUpdate {
        status: Some(TaskStatus::Completed),
        ..TaskUpdate::default()
    };
    let task = tasks::update_task(&client, "t1", &update).await.unwrap();
    assert_eq!(task.status, TaskStatus::Completed);
}

#[tokio::test]
async fn test_delete_of_missing_task_surfaces_not_found() {
    let server = MockServer::start().await;
    let client = test_client(&server);

    Mock::given(method("DELETE"))
        .and(path("/api/todos/gone"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(serde_json::json!({"detail": "Task not found"})),
        )
        .mount(&server)
        .await;

    let err = tasks::delete_task(&client, "gone").await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.to_string(), "Task not found");
}

#[tokio::test]
async fn test_toggle_pending_patches_completed_true() {
    let server = MockServer::start().await;
    let client = test_client(&server);

    Mock::given(method("GET"))
        .and(path("/api/todos"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"todos": [task_json("t1", "pending")]})),
        )
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/api/todos/t1/complete"))
        .and(body_json(serde_json::json!({"completed": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(task_json("t1", "completed")))
        .expect(1)
        .mount(&server)
        .await;

    let task = tasks::toggle_task_completion(&client, "t1").await.unwrap();
    assert_eq!(task.status, TaskStatus::Completed);
}

#[tokio::test]
async fn test_toggle_completed_patches_completed_false() {
    let server = MockServer::start().await;
    let client = test_client(&server);

    Mock::given(method("GET"))
        .and(path("/api/todos"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"todos": [task_json("t1", "completed")]})),
        )
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/api/todos/t1/complete"))
        .and(body_json(serde_json::json!({"completed": false})))
        .respond_with(ResponseTemplate::new(200).set_body_json(task_json("t1", "pending")))
        .expect(1)
        .mount(&server)
        .await;

    tasks::toggle_task_completion(&client, "t1").await.unwrap();
}

#[tokio::test]
async fn test_toggle_unknown_id_fails_without_patching() {
    let server = MockServer::start().await;
    let client = test_client(&server);

    Mock::given(method("GET"))
        .and(path("/api/todos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"todos": []})))
        .mount(&server)
        .await;

    let err = tasks::toggle_task_completion(&client, "nope").await.unwrap_err();
    assert!(matches!(err, api::ApiError::NotFound { .. }));

    let requests = server.received_requests().await.unwrap();
    assert!(requests.iter().all(|r| r.method != wiremock::http::Method::PATCH));
}

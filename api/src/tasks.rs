//! Typed CRUD operations over the task resource.
//!
//! The wire format uses a `completed` boolean on writes while reads return
//! a `status` string; the model keeps the [`TaskStatus`] enum and the
//! request builders translate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::ApiClient;
use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Completed,
}

impl TaskStatus {
    pub fn is_completed(self) -> bool {
        matches!(self, TaskStatus::Completed)
    }

    pub fn toggled(self) -> Self {
        match self {
            TaskStatus::Pending => TaskStatus::Completed,
            TaskStatus::Completed => TaskStatus::Pending,
        }
    }
}

/// A to-do item, as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user_id: String,
}

/// Partial update; only provided fields are sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
}

#[derive(Debug, Deserialize)]
struct TaskListResponse {
    #[serde(default)]
    todos: Vec<Task>,
}

#[derive(Debug, Serialize)]
struct CreateTaskBody<'a> {
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    completed: bool,
}

#[derive(Debug, Serialize)]
struct CompletionBody {
    completed: bool,
}

/// Fetch the caller's tasks. An empty remote collection yields an empty
/// vec, never an error.
pub async fn list_tasks(client: &ApiClient) -> Result<Vec<Task>, ApiError> {
    let response: TaskListResponse = client.get("/api/todos").await?;
    Ok(response.todos)
}

/// Create a task. Title validation (non-empty after trimming) is the
/// caller's responsibility; this sends whatever it is given.
pub async fn create_task(
    client: &ApiClient,
    title: &str,
    description: Option<&str>,
) -> Result<Task, ApiError> {
    client
        .post(
            "/api/todos",
            &CreateTaskBody {
                title,
                description,
                completed: false,
            },
        )
        .await
}

/// Partially update a task; unset fields are omitted from the payload.
pub async fn update_task(
    client: &ApiClient,
    task_id: &str,
    update: &TaskUpdate,
) -> Result<Task, ApiError> {
    let mut payload = Map::new();
    if let Some(title) = &update.title {
        payload.insert("title".to_string(), Value::String(title.clone()));
    }
    if let Some(description) = &update.description {
        payload.insert("description".to_string(), Value::String(description.clone()));
    }
    if let Some(status) = update.status {
        payload.insert("completed".to_string(), Value::Bool(status.is_completed()));
    }
    client.put(&format!("/api/todos/{task_id}"), &payload).await
}

/// Delete a task. Deleting an already-deleted id surfaces the server's
/// Not-Found error unchanged.
pub async fn delete_task(client: &ApiClient, task_id: &str) -> Result<(), ApiError> {
    client.delete(&format!("/api/todos/{task_id}")).await
}

/// Flip a task's completion state.
///
/// Reads the current list to find the task, then PATCHes the logical
/// inverse. There is no concurrency guard between the read and the write;
/// a concurrent writer can make the PATCH apply a stale inverse. The
/// single-user dashboard has no other writers in the common case.
pub async fn toggle_task_completion(client: &ApiClient, task_id: &str) -> Result<Task, ApiError> {
    let tasks = list_tasks(client).await?;
    let task = tasks
        .iter()
        .find(|t| t.id == task_id)
        .ok_or_else(|| ApiError::NotFound {
            id: task_id.to_string(),
        })?;

    set_task_completion(client, task_id, !task.status.is_completed()).await
}

/// Set a task's completion state directly.
pub async fn set_task_completion(
    client: &ApiClient,
    task_id: &str,
    completed: bool,
) -> Result<Task, ApiError> {
    client
        .patch(
            &format!("/api/todos/{task_id}/complete"),
            &CompletionBody { completed },
        )
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_toggles() {
        assert_eq!(TaskStatus::Pending.toggled(), TaskStatus::Completed);
        assert_eq!(TaskStatus::Completed.toggled(), TaskStatus::Pending);
        assert!(!TaskStatus::Pending.is_completed());
    }

    #[test]
    fn test_task_deserializes_from_wire_shape() {
        let task: Task = serde_json::from_value(serde_json::json!({
            "id": "t1",
            "title": "Buy milk",
            "status": "pending",
            "created_at": "2025-01-01T00:00:00Z",
            "updated_at": "2025-01-02T12:30:00Z",
            "user_id": "u1"
        }))
        .unwrap();
        assert_eq!(task.status, TaskStatus::Pending);
        assert!(task.description.is_none());
    }

    #[test]
    fn test_create_body_omits_absent_description() {
        let body = serde_json::to_value(CreateTaskBody {
            title: "Buy milk",
            description: None,
            completed: false,
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"title": "Buy milk", "completed": false})
        );
    }

    #[test]
    fn test_empty_list_response_deserializes() {
        let response: TaskListResponse =
            serde_json::from_value(serde_json::json!({"todos": []})).unwrap();
        assert!(response.todos.is_empty());
    }
}

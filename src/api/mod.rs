//! Task API gateway module.
//!
//! This module talks to the remote task REST API: listing, creating,
//! updating and deleting tasks, and decoding the responses into the
//! types defined in `resource`.

mod client;
mod error;
mod resource;

pub use error::ApiError;
pub use resource::*;

use client::Client;
use log::*;
use reqwest::Method;

/// Default base URL of the task API.
///
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api/tasks";

const LIST_PATH: &str = "AllTask";
const CREATE_PATH: &str = "CreateTask";

/// Responsible for asynchronous interaction with the task API including
/// transformation of response data into explicitly-defined types.
///
pub struct TaskApi {
    client: Client,
}

impl TaskApi {
    /// Returns a new instance for the given base URL.
    ///
    pub fn new(base_url: &str) -> Result<TaskApi, ApiError> {
        debug!("Initializing task API client for {}...", base_url);
        Ok(TaskApi {
            client: Client::new(base_url)?,
        })
    }

    /// Returns the base URL the gateway talks to.
    ///
    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    /// Returns every task known to the server.
    ///
    pub async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        debug!("Requesting all tasks...");
        let tasks: Vec<Task> = self.client.get(LIST_PATH).await?;
        debug!("Retrieved {} tasks", tasks.len());
        Ok(tasks)
    }

    /// Create a task from the draft. The response body is not inspected.
    ///
    pub async fn create_task(&self, draft: &TaskDraft) -> Result<(), ApiError> {
        debug!("Creating task '{}'...", draft.title);
        let body = serde_json::to_value(draft)?;
        self.client
            .call(Method::POST, CREATE_PATH, Some(body))
            .await?;
        Ok(())
    }

    /// Overwrite the task's fields with the draft.
    ///
    pub async fn update_task(&self, id: &str, draft: &TaskDraft) -> Result<(), ApiError> {
        debug!("Updating task {}...", id);
        let body = serde_json::to_value(draft)?;
        self.client.call(Method::PATCH, id, Some(body)).await?;
        Ok(())
    }

    /// Delete a task.
    ///
    pub async fn delete_task(&self, id: &str) -> Result<(), ApiError> {
        debug!("Deleting task {}...", id);
        self.client.call(Method::DELETE, id, None).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::{Fake, Faker};
    use httpmock::prelude::*;
    use serde_json::json;

    fn api(server: &MockServer) -> TaskApi {
        TaskApi::new(&server.base_url()).unwrap()
    }

    #[tokio::test]
    async fn list_tasks_success() -> Result<(), ApiError> {
        let tasks: [Task; 2] = Faker.fake();

        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/AllTask");
                then.status(200).json_body(json!([
                    {
                        "_id": tasks[0].id,
                        "title": tasks[0].title,
                        "description": tasks[0].description,
                        "priority": tasks[0].priority,
                        "category": tasks[0].category,
                    },
                    {
                        "_id": tasks[1].id,
                        "title": tasks[1].title,
                        "description": tasks[1].description,
                        "priority": tasks[1].priority,
                        "category": tasks[1].category,
                    }
                ]));
            })
            .await;

        let received = api(&server).list_tasks().await?;
        mock.assert_async().await;
        assert_eq!(received, tasks.to_vec());
        Ok(())
    }

    #[tokio::test]
    async fn list_tasks_under_base_path() -> Result<(), ApiError> {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/tasks/AllTask");
                then.status(200).json_body(json!([]));
            })
            .await;

        let api = TaskApi::new(&server.url("/api/tasks"))?;
        assert!(api.list_tasks().await?.is_empty());
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn list_tasks_server_error() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/AllTask");
                then.status(500).body("boom");
            })
            .await;

        let result = api(&server).list_tasks().await;
        mock.assert_async().await;
        match result {
            Err(ApiError::Status { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn list_tasks_malformed_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/AllTask");
                then.status(200).body("{\"tasks\": ");
            })
            .await;

        assert!(matches!(
            api(&server).list_tasks().await,
            Err(ApiError::Deserialization(_))
        ));
    }

    #[tokio::test]
    async fn create_task_sends_draft_without_id() -> Result<(), ApiError> {
        let draft: TaskDraft = Faker.fake();

        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/CreateTask")
                    .json_body(json!({
                        "title": draft.title,
                        "description": draft.description,
                        "priority": draft.priority,
                        "category": draft.category,
                    }));
                then.status(201).json_body(json!({ "_id": "new" }));
            })
            .await;

        api(&server).create_task(&draft).await?;
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn create_task_rejected() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/CreateTask");
                then.status(400).body("title required");
            })
            .await;

        let result = api(&server).create_task(&TaskDraft::default()).await;
        assert!(matches!(result, Err(ApiError::Status { status: 400, .. })));
    }

    #[tokio::test]
    async fn update_task_patches_by_id() -> Result<(), ApiError> {
        let draft: TaskDraft = Faker.fake();

        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("PATCH").path("/65f1").json_body(json!({
                    "title": draft.title,
                    "description": draft.description,
                    "priority": draft.priority,
                    "category": draft.category,
                }));
                then.status(200);
            })
            .await;

        api(&server).update_task("65f1", &draft).await?;
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn delete_task_success() -> Result<(), ApiError> {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(DELETE).path("/65f1");
                then.status(204);
            })
            .await;

        api(&server).delete_task("65f1").await?;
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn delete_task_not_found() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(DELETE).path("/missing");
                then.status(404);
            })
            .await;

        let result = api(&server).delete_task("missing").await;
        mock.assert_async().await;
        assert!(matches!(result, Err(ApiError::Status { status: 404, .. })));
    }

    #[tokio::test]
    async fn unreachable_server() {
        // Port 9 (discard) is not expected to accept HTTP connections.
        let api = TaskApi::new("http://127.0.0.1:9").unwrap();
        assert!(matches!(
            api.list_tasks().await,
            Err(ApiError::HttpRequest(_))
        ));
    }
}

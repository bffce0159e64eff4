// ABOUTME: HTTP client for a remote todo service
// ABOUTME: Talks to the /api/todos endpoints and surfaces server-side errors

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info};

use crate::types::{Todo, TodoData, TodoUpdate};

#[derive(Debug, Error)]
pub enum TodoClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API returned {status}: {message}")]
    Api { status: StatusCode, message: String },

    #[error("Todo not found: {0}")]
    NotFound(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),
}

pub type TodoClientResult<T> = Result<T, TodoClientError>;

#[derive(Debug, Deserialize)]
struct TodoListBody {
    todos: Vec<Todo>,
}

#[derive(Debug, Deserialize)]
struct TodoBody {
    todo: Todo,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct UpdateBody<'a> {
    id: &'a str,
    updates: &'a TodoUpdate,
}

/// Client for a todo service exposing the `/api/todos` endpoints
#[derive(Debug, Clone)]
pub struct TodoApiClient {
    client: Client,
    base_url: String,
}

impl TodoApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    fn todos_url(&self) -> String {
        format!("{}/api/todos", self.base_url)
    }

    pub async fn list_todos(&self) -> TodoClientResult<Vec<Todo>> {
        let response = self.client.get(self.todos_url()).send().await?;
        let body: TodoListBody = Self::parse(response, "Failed to fetch todos").await?;
        Ok(body.todos)
    }

    pub async fn add_todo(&self, data: &TodoData) -> TodoClientResult<Todo> {
        info!("Creating remote todo '{}'", data.title);
        let response = self.client.post(self.todos_url()).json(data).send().await?;
        let body: TodoBody = Self::parse(response, "Failed to create todo").await?;
        Ok(body.todo)
    }

    pub async fn update_todo(&self, id: &str, updates: &TodoUpdate) -> TodoClientResult<Todo> {
        let response = self
            .client
            .put(self.todos_url())
            .json(&UpdateBody { id, updates })
            .send()
            .await?;
        let body: TodoBody = Self::parse(response, "Failed to update todo").await?;
        Ok(body.todo)
    }

    pub async fn delete_todo(&self, id: &str) -> TodoClientResult<Todo> {
        let response = self
            .client
            .delete(self.todos_url())
            .query(&[("id", id)])
            .send()
            .await?;
        let body: TodoBody = Self::parse(response, "Failed to delete todo").await?;
        Ok(body.todo)
    }

    /// Reads the current status from the server, then writes the flipped one
    pub async fn toggle_todo_status(&self, id: &str) -> TodoClientResult<Todo> {
        let todos = self.list_todos().await?;
        let current = todos
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| TodoClientError::NotFound(id.to_string()))?;

        let next = current.status.toggled();
        self.update_todo(id, &TodoUpdate::status(next)).await
    }

    async fn parse<T: DeserializeOwned>(response: Response, fallback: &str) -> TodoClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error)
                .unwrap_or_else(|| fallback.to_string());
            error!("Todo API error: {} - {}", status, message);
            return Err(TodoClientError::Api { status, message });
        }

        response
            .json()
            .await
            .map_err(|e| TodoClientError::Parse(e.to_string()))
    }
}

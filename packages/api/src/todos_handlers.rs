// ABOUTME: HTTP request handlers for todo operations
// ABOUTME: CRUD, toggling, bulk clearing, filtering, and stats over the shared in-memory store

use std::str::FromStr;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use taskdeck_core::{truncate, DEFAULT_CATEGORIES};
use taskdeck_tasks::{Priority, TodoData, TodoFilter, TodoStatus, TodoUpdate};

use crate::response::{bad_request, todo_error, validation_error};
use crate::state::AppState;

/// Query parameters for listing todos. Each selector accepts `all` to disable it.
#[derive(Debug, Default, Deserialize)]
pub struct ListTodosParams {
    pub q: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub category: Option<String>,
}

/// `None` and the `all` sentinel both mean "no constraint"
fn parse_selector<T: FromStr<Err = String>>(value: Option<&str>) -> Result<Option<T>, String> {
    match value {
        None | Some("all") | Some("") => Ok(None),
        Some(raw) => raw.parse().map(Some),
    }
}

impl ListTodosParams {
    pub fn into_filter(self) -> Result<TodoFilter, String> {
        Ok(TodoFilter {
            query: self.q.unwrap_or_default(),
            priority: parse_selector::<Priority>(self.priority.as_deref())?,
            status: parse_selector::<TodoStatus>(self.status.as_deref())?,
            category: self
                .category
                .filter(|c| c != "all" && !c.is_empty()),
        })
    }
}

/// List todos, optionally filtered
pub async fn list_todos(
    State(state): State<AppState>,
    params: Result<Query<ListTodosParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return bad_request(rejection.body_text()),
    };
    let filter = match params.into_filter() {
        Ok(filter) => filter,
        Err(message) => return bad_request(message),
    };

    let store = state.todos.read().await;
    let todos: Vec<_> = store.filter(&filter).cloned().collect();
    info!("Listing {} of {} todos", todos.len(), store.len());

    Json(json!({ "todos": todos })).into_response()
}

/// Create a new todo
pub async fn create_todo(
    State(state): State<AppState>,
    payload: Result<Json<TodoData>, JsonRejection>,
) -> Response {
    let Json(data) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return bad_request(rejection.body_text()),
    };
    if let Err(e) = data.validate() {
        return validation_error(e);
    }

    info!("Creating todo '{}'", truncate(data.title.trim(), 60));

    let mut store = state.todos.write().await;
    let todo = store.add(data).clone();

    (StatusCode::CREATED, Json(json!({ "todo": todo }))).into_response()
}

/// Request body for updating a todo
#[derive(Debug, Deserialize)]
pub struct UpdateTodoRequest {
    pub id: String,
    #[serde(default)]
    pub updates: TodoUpdate,
}

/// Merge updates into an existing todo
pub async fn update_todo(
    State(state): State<AppState>,
    payload: Result<Json<UpdateTodoRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return bad_request(rejection.body_text()),
    };
    if let Err(e) = request.updates.validate() {
        return validation_error(e);
    }

    info!("Updating todo: {}", request.id);

    let mut store = state.todos.write().await;
    match store.edit(&request.id, request.updates) {
        Ok(todo) => Json(json!({ "todo": todo })).into_response(),
        Err(e) => todo_error(e),
    }
}

#[derive(Debug, Deserialize)]
pub struct DeleteTodoParams {
    pub id: Option<String>,
}

/// Delete a todo by `?id=`
pub async fn delete_todo(
    State(state): State<AppState>,
    params: Result<Query<DeleteTodoParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return bad_request(rejection.body_text()),
    };
    let Some(id) = params.id.filter(|id| !id.is_empty()) else {
        return bad_request("Todo id is required");
    };

    info!("Deleting todo: {}", id);

    let mut store = state.todos.write().await;
    match store.delete(&id) {
        Ok(todo) => Json(json!({ "todo": todo })).into_response(),
        Err(e) => todo_error(e),
    }
}

/// Flip a todo between pending and completed
pub async fn toggle_todo(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    info!("Toggling todo: {}", id);

    let mut store = state.todos.write().await;
    match store.toggle_status(&id) {
        Ok(todo) => Json(json!({ "todo": todo })).into_response(),
        Err(e) => todo_error(e),
    }
}

/// Remove every completed todo
pub async fn clear_completed(State(state): State<AppState>) -> Response {
    let cleared = state.todos.write().await.clear_completed();
    info!("{} completed todos cleared", cleared);

    Json(json!({ "cleared": cleared })).into_response()
}

/// Aggregate counts over the whole store
pub async fn get_stats(State(state): State<AppState>) -> Response {
    let stats = state.todos.read().await.stats();
    Json(stats).into_response()
}

/// Categories offered when creating a todo
pub async fn list_categories() -> Response {
    Json(json!({ "categories": DEFAULT_CATEGORIES })).into_response()
}

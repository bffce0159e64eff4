// ABOUTME: HTTP API layer for Taskdeck providing REST endpoints and routing
// ABOUTME: Integration layer over the todo store and the chat relay

use axum::{
    routing::{get, post},
    Router,
};

pub mod chat_handlers;
pub mod response;
pub mod state;
pub mod todos_handlers;

pub use state::AppState;

/// Creates the todos API router (nested under /api/todos)
pub fn create_todos_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(todos_handlers::list_todos)
                .post(todos_handlers::create_todo)
                .put(todos_handlers::update_todo)
                .delete(todos_handlers::delete_todo),
        )
        .route("/stats", get(todos_handlers::get_stats))
        .route("/categories", get(todos_handlers::list_categories))
        .route("/clear-completed", post(todos_handlers::clear_completed))
        .route("/{id}/toggle", post(todos_handlers::toggle_todo))
}

/// Creates the chat API router (nested under /api/chat)
pub fn create_chat_router() -> Router<AppState> {
    Router::new().route("/", post(chat_handlers::chat))
}

/// Creates the full API router with state attached
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/todos", create_todos_router())
        .nest("/api/chat", create_chat_router())
        .with_state(state)
}

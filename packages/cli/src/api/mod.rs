use axum::{routing::get, Router};

use taskdeck_api::AppState;

pub mod health;

/// Full application router: health check plus the todo and chat APIs
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health_check))
        .merge(taskdeck_api::create_router(state))
}

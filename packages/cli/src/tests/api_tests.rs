use crate::api;
use crate::config::Config;
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use std::sync::Arc;
use std::time::Duration;
use taskdeck_ai::{AIServiceResult, ChatMessage, ChatProvider};
use taskdeck_api::AppState;
use tower::ServiceExt;

struct EchoProvider;

#[async_trait]
impl ChatProvider for EchoProvider {
    async fn generate_reply(
        &self,
        _history: &[ChatMessage],
        message: &str,
    ) -> AIServiceResult<String> {
        Ok(message.to_string())
    }
}

fn test_config() -> Config {
    Config {
        host: "127.0.0.1".parse().unwrap(),
        port: 4001,
        cors_origin: "http://localhost:3000".to_string(),
        http_connect_timeout: Duration::from_secs(10),
    }
}

fn app() -> Router {
    let state = AppState::new(Arc::new(EchoProvider));
    api::create_router(state).layer(crate::cors_layer(&test_config()).unwrap())
}

#[tokio::test]
async fn test_health_endpoint() {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/health")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_todos_endpoint_is_mounted() {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/todos")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, serde_json::json!({ "todos": [] }));
}

#[tokio::test]
async fn test_chat_endpoint_is_mounted() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/chat")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"messages":[{"role":"user","content":"ping"}]}"#))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["content"], "ping");
}

#[tokio::test]
async fn test_invalid_endpoint() {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/nonexistent")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_method_not_allowed() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/health")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_cors_preflight() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/todos")
        .header("origin", "http://localhost:3000")
        .header("access-control-request-method", "PUT")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("http://localhost:3000")
    );
}

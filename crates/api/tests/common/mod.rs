//! Shared harness for HTTP-level integration tests.
//!
//! Mirrors the production router construction so tests exercise the
//! same middleware stack (CORS, request ID, timeout, tracing, panic
//! recovery) that `main.rs` uses.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

use taskboard_ai::{AiConfig, GeminiClient};
use taskboard_api::config::ServerConfig;
use taskboard_api::router::build_app_router;
use taskboard_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults and no AI credential.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["*".to_string()],
        request_timeout_secs: 30,
        database_url: "sqlite::memory:".to_string(),
        ai: AiConfig {
            api_key: None,
            model: "gemini-2.5-flash".to_string(),
            // Unroutable; tests that need a live upstream override it.
            base_url: "http://127.0.0.1:9".to_string(),
        },
    }
}

/// Build the full application router with all middleware layers, using
/// the given database pool.
pub fn build_test_app(pool: SqlitePool) -> Router {
    build_test_app_with_ai(pool, test_config().ai)
}

/// Same as [`build_test_app`], with an explicit AI configuration (used
/// by tests that point the gateway at a mock upstream).
pub fn build_test_app_with_ai(pool: SqlitePool, ai: AiConfig) -> Router {
    let mut config = test_config();
    config.ai = ai.clone();

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        ai: Arc::new(GeminiClient::new(ai)),
    };
    build_app_router(state, &config)
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&json).unwrap())
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a project via the API and return its id.
pub async fn create_project(pool: &SqlitePool, name: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/projects",
        serde_json::json!({ "name": name }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

/// Create a task via the API and return its id.
pub async fn create_task(pool: &SqlitePool, project_id: i64, title: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/tasks",
        serde_json::json!({ "projectId": project_id, "title": title }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

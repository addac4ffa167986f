//! HTTP-level integration tests for the `/api/ai` endpoints.
//!
//! Success-path tests spawn a local mock generateContent upstream and
//! point the gateway's base URL at it; validation and missing-credential
//! tests never touch the network.

mod common;

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Json, Router};
use common::{body_json, post_json};
use sqlx::SqlitePool;
use taskboard_ai::AiConfig;

/// Requests captured by the mock upstream, in arrival order.
type Captured = Arc<Mutex<Vec<serde_json::Value>>>;

/// Spawn a mock upstream answering every request with `reply`.
/// Returns its base URL and the captured request bodies.
async fn spawn_mock_upstream(reply: serde_json::Value) -> (String, Captured) {
    let captured: Captured = Arc::new(Mutex::new(Vec::new()));

    async fn handle(
        State((captured, reply)): State<(Captured, serde_json::Value)>,
        Json(body): Json<serde_json::Value>,
    ) -> Json<serde_json::Value> {
        captured.lock().unwrap().push(body);
        Json(reply)
    }

    let router = Router::new()
        .fallback(handle)
        .with_state((Arc::clone(&captured), reply));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    (format!("http://{addr}"), captured)
}

fn mock_ai_config(base_url: String) -> AiConfig {
    AiConfig {
        api_key: Some("test-key".to_string()),
        model: "gemini-2.5-flash".to_string(),
        base_url,
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn summarize_requires_tasks_array(pool: SqlitePool) {
    for body in [
        serde_json::json!({}),
        serde_json::json!({"tasks": "not an array"}),
        serde_json::json!({"tasks": {"title": "x"}}),
    ] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(app, "/api/ai/summarize", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "tasks must be an array");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn qa_requires_card_and_question(pool: SqlitePool) {
    for body in [
        serde_json::json!({}),
        serde_json::json!({"card": {"title": "x"}}),
        serde_json::json!({"question": "why?"}),
        serde_json::json!({"card": {"title": "x"}, "question": ""}),
    ] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(app, "/api/ai/qa", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "card and question required");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn summarize_without_api_key_returns_500(pool: SqlitePool) {
    // Default test config carries no credential.
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/ai/summarize",
        serde_json::json!({"tasks": [{"title": "x"}]}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["error"], "AI request failed");
    assert_eq!(json["details"], "GEMINI_API_KEY is not set");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn summarize_extracts_text_and_echoes_raw(pool: SqlitePool) {
    let reply = serde_json::json!({
        "candidates": [{"content": {"parts": [{"text": "A"}, {"text": "B"}]}}]
    });
    let (base_url, captured) = spawn_mock_upstream(reply.clone()).await;

    let app = common::build_test_app_with_ai(pool, mock_ai_config(base_url));
    let response = post_json(
        app,
        "/api/ai/summarize",
        serde_json::json!({"tasks": [
            {"title": "Write doc", "status": "todo"},
            {"title": "Review", "description": "needs two people", "status": "done"}
        ]}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["text"], "A\n\nB");
    assert_eq!(json["raw"], reply);

    // The outbound prompt lists each task in the documented line format.
    let requests = captured.lock().unwrap();
    assert_eq!(requests.len(), 1);
    let prompt = requests[0]["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(prompt.contains("- Write doc [status:todo]"));
    assert!(prompt.contains("- Review: needs two people [status:done]"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn qa_embeds_card_and_question(pool: SqlitePool) {
    let (base_url, captured) = spawn_mock_upstream(serde_json::json!({"output": "plain"})).await;

    let app = common::build_test_app_with_ai(pool, mock_ai_config(base_url));
    let response = post_json(
        app,
        "/api/ai/qa",
        serde_json::json!({
            "card": {"title": "Ship it", "status": "inprogress"},
            "question": "What is blocking this?"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["text"], "plain");

    let requests = captured.lock().unwrap();
    let prompt = requests[0]["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(prompt.contains("Title: Ship it"));
    assert!(prompt.contains("Status: inprogress"));
    assert!(prompt.contains("Question: What is blocking this?"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn failed_summarize_does_not_disturb_stored_tasks(pool: SqlitePool) {
    let project = common::create_project(&pool, "Resilient").await;
    common::create_task(&pool, project, "still here").await;

    // No credential: the AI call fails, the task data is untouched.
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/ai/summarize",
        serde_json::json!({"tasks": [{"title": "still here"}]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let app = common::build_test_app(pool);
    let response = common::get(app, &format!("/api/tasks/project/{project}")).await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);
}

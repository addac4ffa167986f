//! Handlers for the `/ai` resource.
//!
//! Bodies are validated by hand against raw JSON so malformed shapes
//! yield the documented 400 messages rather than an extractor
//! rejection.

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};
use taskboard_ai::{AiReply, TaskCard};
use taskboard_core::error::CoreError;

use crate::error::AppResult;
use crate::state::AppState;

/// POST /api/ai/summarize
///
/// `{tasks: Task[]}` -> `{success: true, text, raw}`.
pub async fn summarize(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<Json<Value>> {
    let Some(tasks) = body.get("tasks").and_then(Value::as_array) else {
        return Err(CoreError::Validation("tasks must be an array".to_string()).into());
    };

    let cards = parse_cards(tasks)?;
    let reply = state.ai.summarize(&cards).await?;
    Ok(Json(reply_body(reply)))
}

/// POST /api/ai/qa
///
/// `{card: Task, question: string}` -> `{success: true, text, raw}`.
pub async fn qa(State(state): State<AppState>, Json(body): Json<Value>) -> AppResult<Json<Value>> {
    let card = body.get("card").filter(|card| !card.is_null());
    let question = body
        .get("question")
        .and_then(Value::as_str)
        .filter(|q| !q.is_empty());
    let (Some(card), Some(question)) = (card, question) else {
        return Err(CoreError::Validation("card and question required".to_string()).into());
    };

    let card: TaskCard = serde_json::from_value(card.clone())
        .map_err(|err| CoreError::Validation(format!("invalid card: {err}")))?;
    let reply = state.ai.answer(&card, question).await?;
    Ok(Json(reply_body(reply)))
}

fn parse_cards(tasks: &[Value]) -> Result<Vec<TaskCard>, CoreError> {
    tasks
        .iter()
        .map(|task| {
            serde_json::from_value(task.clone())
                .map_err(|err| CoreError::Validation(format!("invalid task entry: {err}")))
        })
        .collect()
}

fn reply_body(reply: AiReply) -> Value {
    json!({ "success": true, "text": reply.text, "raw": reply.raw })
}

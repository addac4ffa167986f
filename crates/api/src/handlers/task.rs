//! Handlers for the `/tasks` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use taskboard_core::error::CoreError;
use taskboard_core::status::TaskStatus;
use taskboard_core::types::DbId;
use taskboard_db::models::task::{CreateTask, Task, UpdateTask};
use taskboard_db::repositories::{ProjectRepo, TaskRepo};

use crate::error::AppResult;
use crate::state::AppState;

/// Request body for task creation. Required fields stay optional so a
/// missing field surfaces as a 400 validation error instead of a
/// deserialization rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    pub project_id: Option<DbId>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
}

/// POST /api/tasks
///
/// The project reference is validated once here, at creation time;
/// updates never re-check it.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTaskRequest>,
) -> AppResult<(StatusCode, Json<Task>)> {
    let title = input.title.as_deref().map(str::trim).unwrap_or_default();
    let Some(project_id) = input.project_id.filter(|_| !title.is_empty()) else {
        return Err(CoreError::Validation("title and projectId are required".to_string()).into());
    };

    if ProjectRepo::find_by_id(&state.pool, project_id).await?.is_none() {
        return Err(CoreError::Validation(format!(
            "projectId {project_id} does not reference an existing project"
        ))
        .into());
    }

    let task = TaskRepo::create(
        &state.pool,
        &CreateTask {
            project_id,
            title: title.to_string(),
            description: input.description,
            status: input.status,
        },
    )
    .await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /api/tasks/project/{project_id}
///
/// Ascending by creation time; this is the sequence the board lanes and
/// the AI gateway consume.
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<Task>>> {
    let tasks = TaskRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(tasks))
}

/// PUT /api/tasks/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTask>,
) -> AppResult<Json<Task>> {
    let task = TaskRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound { entity: "Task", id })?;
    Ok(Json(task))
}

/// DELETE /api/tasks/{id}
///
/// Idempotent: deleting an absent id still reports success.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Json<Value>> {
    TaskRepo::delete(&state.pool, id).await?;
    Ok(Json(json!({ "success": true })))
}

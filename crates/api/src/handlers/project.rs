//! Handlers for the `/projects` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use taskboard_core::error::CoreError;
use taskboard_core::types::DbId;
use taskboard_db::models::project::{CreateProject, Project, UpdateProject};
use taskboard_db::repositories::ProjectRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// Request body for project creation. `name` stays optional so a
/// missing field surfaces as a 400 validation error instead of a
/// deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// POST /api/projects
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProjectRequest>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let name = input.name.as_deref().map(str::trim).unwrap_or_default();
    if name.is_empty() {
        return Err(CoreError::Validation("name is required".to_string()).into());
    }

    let project = ProjectRepo::create(
        &state.pool,
        &CreateProject {
            name: name.to_string(),
            description: input.description,
        },
    )
    .await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(projects))
}

/// GET /api/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Project",
            id,
        })?;
    Ok(Json(project))
}

/// PUT /api/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Project",
            id,
        })?;
    Ok(Json(project))
}

/// DELETE /api/projects/{id}
///
/// Cascades to the project's tasks. Idempotent: deleting an absent id
/// still reports success.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Json<Value>> {
    ProjectRepo::delete(&state.pool, id).await?;
    Ok(Json(json!({ "success": true })))
}

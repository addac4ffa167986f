//! Task entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskboard_core::status::TaskStatus;
use taskboard_core::types::{DbId, Timestamp};

/// A task row from the `tasks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: DbId,
    /// Owning project. Set once at creation, never re-validated afterward.
    pub project_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub created_at: Timestamp,
}

/// DTO for creating a new task. `status` defaults to `todo` when omitted.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTask {
    pub project_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
}

/// DTO for updating an existing task. All fields are optional; only the
/// provided fields are merged into the row.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTask {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
}

pub mod ai;
pub mod health;
pub mod project;
pub mod task;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                       list, create
/// /projects/{id}                  get, update, delete (cascade)
///
/// /tasks                          create
/// /tasks/project/{project_id}     list by project
/// /tasks/{id}                     update, delete
///
/// /ai/summarize                   summarize a task collection (POST)
/// /ai/qa                          answer a question about one card (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/tasks", task::router())
        .nest("/ai", ai::router())
}

//! Route definitions for the `/tasks` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::task;
use crate::state::AppState;

/// Routes mounted at `/tasks`.
///
/// ```text
/// POST   /                         -> create
/// GET    /project/{project_id}     -> list_by_project
/// PUT    /{id}                     -> update
/// DELETE /{id}                     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(task::create))
        .route("/project/{project_id}", get(task::list_by_project))
        .route("/{id}", put(task::update).delete(task::delete))
}

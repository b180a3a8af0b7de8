//! Route configuration for the task API.
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | POST | /tasks | `create_task` |
//! | GET | /tasks | `list_tasks` |
//! | GET | /tasks/{id} | `get_task_by_id` |
//! | PUT | /tasks/{id} | `update_task` |
//! | DELETE | /tasks/{id} | `delete_task` |
//! | GET | /health | `health_check` |

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::api::handlers::tasks::{
    create_task, delete_task, get_task_by_id, list_tasks, update_task,
};
use crate::infrastructure::AppDependencies;

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

/// GET /health - Liveness probe.
#[allow(clippy::unused_async)]
pub async fn health_check(
    State(_dependencies): State<AppDependencies>,
) -> (StatusCode, Json<HealthResponse>) {
    let response = HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    (StatusCode::OK, Json(response))
}

/// Creates the axum router with all API routes.
///
/// # Arguments
///
/// * `dependencies` - the application dependencies handed to every handler
pub fn create_router(dependencies: AppDependencies) -> Router {
    Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route(
            "/tasks/{id}",
            get(get_task_by_id).put(update_task).delete(delete_task),
        )
        .route("/health", get(health_check))
        .with_state(dependencies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn health_response_serializes_status_and_version() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
        };

        let json = serde_json::to_string(&response).unwrap();

        assert!(json.contains("\"status\":\"healthy\""));
        assert!(json.contains("\"version\":\"0.1.0\""));
    }
}

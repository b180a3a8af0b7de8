//! Task HTTP handlers.
//!
//! One handler per operation:
//!
//! - `POST /tasks` - create a task
//! - `GET /tasks` - list tasks, optionally narrowed by status
//! - `GET /tasks/{id}` - fetch a single task
//! - `PUT /tasks/{id}` - partially update a task
//! - `DELETE /tasks/{id}` - delete a task
//!
//! Each handler validates its input, makes a single service call, and maps
//! the result or absence onto the response code. Store failures convert
//! into [`ApiError::Internal`] through `?` and are not handled here.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use crate::api::dto::requests::{CreateTaskRequest, ListTasksQuery, UpdateTaskRequest};
use crate::api::dto::responses::TaskResponse;
use crate::api::middleware::error_handler::{ApiError, ApiJson};
use crate::infrastructure::AppDependencies;

/// POST /tasks - Create a new task.
///
/// # Response
///
/// - `201 Created` with the created record
/// - `400 Bad Request` when the title is missing or empty
pub async fn create_task(
    State(dependencies): State<AppDependencies>,
    ApiJson(request): ApiJson<CreateTaskRequest>,
) -> Result<(StatusCode, Json<TaskResponse>), ApiError> {
    let new_task = request.validate().map_err(ApiError::Validation)?;

    let task = dependencies.tasks().create_task(new_task).await?;

    Ok((StatusCode::CREATED, Json(task.into())))
}

/// GET /tasks - List tasks.
///
/// # Query Parameters
///
/// - `status` - optional, `pending` or `completed`
///
/// # Response
///
/// - `200 OK` with the array of records
/// - `400 Bad Request` when the status value is not permitted
pub async fn list_tasks(
    State(dependencies): State<AppDependencies>,
    Query(query): Query<ListTasksQuery>,
) -> Result<Json<Vec<TaskResponse>>, ApiError> {
    let filter = query.validate().map_err(ApiError::Validation)?;

    let tasks = dependencies.tasks().get_all_tasks(filter).await?;

    Ok(Json(tasks.into_iter().map(TaskResponse::from).collect()))
}

/// GET /tasks/{id} - Fetch a single task.
///
/// # Response
///
/// - `200 OK` with the record
/// - `404 Not Found` when no record has that identifier
pub async fn get_task_by_id(
    State(dependencies): State<AppDependencies>,
    Path(id): Path<String>,
) -> Result<Json<TaskResponse>, ApiError> {
    let task = dependencies
        .tasks()
        .get_task_by_id(&id)
        .await?
        .ok_or_else(ApiError::task_not_found)?;

    Ok(Json(task.into()))
}

/// PUT /tasks/{id} - Partially update a task.
///
/// Fields absent from the body keep their stored values.
///
/// # Response
///
/// - `200 OK` with the updated record
/// - `400 Bad Request` when a present field fails validation
/// - `404 Not Found` when no record has that identifier
pub async fn update_task(
    State(dependencies): State<AppDependencies>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<UpdateTaskRequest>,
) -> Result<Json<TaskResponse>, ApiError> {
    let patch = request.validate().map_err(ApiError::Validation)?;

    let task = dependencies
        .tasks()
        .update_task(&id, patch)
        .await?
        .ok_or_else(ApiError::task_not_found)?;

    Ok(Json(task.into()))
}

/// DELETE /tasks/{id} - Delete a task.
///
/// # Response
///
/// - `204 No Content` with an empty body
/// - `404 Not Found` when no record has that identifier
pub async fn delete_task(
    State(dependencies): State<AppDependencies>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let removed = dependencies.tasks().delete_task(&id).await?;

    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::task_not_found())
    }
}

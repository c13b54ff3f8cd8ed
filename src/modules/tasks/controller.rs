use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::instrument;

use crate::middleware::auth::CurrentUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{CreateTaskRequest, MessageResponse, Task, TaskListResponse, UpdateTaskRequest};
use super::service::TaskService;

/// Create a task
#[utoipa::path(
    post,
    path = "/api/tasks",
    request_body = CreateTaskRequest,
    responses(
        (status = 201, description = "Task created", body = Task),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Tasks"
)]
#[instrument(skip(state, dto))]
pub async fn create_task(
    State(state): State<AppState>,
    user: CurrentUser,
    ValidatedJson(dto): ValidatedJson<CreateTaskRequest>,
) -> Result<(StatusCode, Json<Task>), AppError> {
    let task = TaskService::create(&state.db, user.id, dto).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// List the caller's tasks
#[utoipa::path(
    get,
    path = "/api/tasks",
    responses(
        (status = 200, description = "Tasks owned by the caller", body = TaskListResponse),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Tasks"
)]
#[instrument(skip(state))]
pub async fn list_tasks(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<TaskListResponse>, AppError> {
    let tasks = TaskService::list(&state.db, user.id).await?;
    Ok(Json(TaskListResponse { tasks }))
}

/// Get a single task
#[utoipa::path(
    get,
    path = "/api/tasks/{id}",
    params(("id" = i64, Path, description = "Task id")),
    responses(
        (status = 200, description = "The task", body = Task),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Task not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Tasks"
)]
#[instrument(skip(state))]
pub async fn get_task(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<Task>, AppError> {
    let task = TaskService::get(&state.db, user.id, id).await?;
    Ok(Json(task))
}

/// Update a task
#[utoipa::path(
    put,
    path = "/api/tasks/{id}",
    params(("id" = i64, Path, description = "Task id")),
    request_body = UpdateTaskRequest,
    responses(
        (status = 200, description = "Updated task", body = Task),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Task not found", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Tasks"
)]
#[instrument(skip(state, dto))]
pub async fn update_task(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    ValidatedJson(dto): ValidatedJson<UpdateTaskRequest>,
) -> Result<Json<Task>, AppError> {
    let task = TaskService::update(&state.db, user.id, id, dto).await?;
    Ok(Json(task))
}

/// Delete a task
#[utoipa::path(
    delete,
    path = "/api/tasks/{id}",
    params(("id" = i64, Path, description = "Task id")),
    responses(
        (status = 200, description = "Task deleted", body = MessageResponse),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Task not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Tasks"
)]
#[instrument(skip(state))]
pub async fn delete_task(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    TaskService::delete(&state.db, user.id, id).await?;
    Ok(Json(MessageResponse {
        message: "task deleted".to_string(),
    }))
}

/// Toggle a task's completion flag
#[utoipa::path(
    post,
    path = "/api/tasks/{id}/complete",
    params(("id" = i64, Path, description = "Task id")),
    responses(
        (status = 200, description = "Task with the flipped completion flag", body = Task),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Task not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Tasks"
)]
#[instrument(skip(state))]
pub async fn toggle_task_completion(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<Task>, AppError> {
    let task = TaskService::toggle_completion(&state.db, user.id, id).await?;
    Ok(Json(task))
}

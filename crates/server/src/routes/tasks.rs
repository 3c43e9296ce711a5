use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use utoipa::ToSchema;

use service::task_service::{self, TaskInput};

use crate::errors::ApiError;
use crate::routes::{AppState, Confirmation, ListQuery};

/// Full task body; POST and PUT take the same shape.
#[derive(Debug, Deserialize, ToSchema)]
pub struct TaskPayload {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub done: bool,
}

impl From<TaskPayload> for TaskInput {
    fn from(p: TaskPayload) -> Self {
        TaskInput {
            title: p.title,
            description: p.description,
            done: p.done,
        }
    }
}

#[utoipa::path(
    get,
    path = "/tasks/",
    tag = "tasks",
    params(ListQuery),
    responses((status = 200, description = "Page of tasks in insertion order"))
)]
pub async fn list_tasks(
    State(state): State<AppState>,
    Query(q): Query<ListQuery>,
) -> Result<Json<Vec<models::task::Model>>, ApiError> {
    let tasks = task_service::list_tasks(&state.db, q.skip, q.limit).await?;
    Ok(Json(tasks))
}

#[utoipa::path(
    post,
    path = "/tasks/",
    tag = "tasks",
    request_body = TaskPayload,
    responses(
        (status = 200, description = "Created task, id included"),
        (status = 422, description = "Field validation failed")
    )
)]
pub async fn create_task(
    State(state): State<AppState>,
    Json(payload): Json<TaskPayload>,
) -> Result<Json<models::task::Model>, ApiError> {
    let task = task_service::create_task(&state.db, payload.into()).await?;
    Ok(Json(task))
}

#[utoipa::path(
    get,
    path = "/tasks/{id}/",
    tag = "tasks",
    params(("id" = i32, Path, description = "Task id")),
    responses(
        (status = 200, description = "Task"),
        (status = 404, description = "No task with this id")
    )
)]
pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<models::task::Model>, ApiError> {
    let task = task_service::get_task(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Task"))?;
    Ok(Json(task))
}

#[utoipa::path(
    put,
    path = "/tasks/{id}/",
    tag = "tasks",
    params(("id" = i32, Path, description = "Task id")),
    request_body = TaskPayload,
    responses(
        (status = 200, description = "Updated task"),
        (status = 404, description = "No task with this id"),
        (status = 422, description = "Field validation failed")
    )
)]
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<TaskPayload>,
) -> Result<Json<models::task::Model>, ApiError> {
    let task = task_service::update_task(&state.db, id, payload.into()).await?;
    Ok(Json(task))
}

#[utoipa::path(
    delete,
    path = "/tasks/{id}/",
    tag = "tasks",
    params(("id" = i32, Path, description = "Task id")),
    responses(
        (status = 200, description = "Deletion confirmation"),
        (status = 404, description = "No task with this id")
    )
)]
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Confirmation>, ApiError> {
    task_service::delete_task(&state.db, id).await?;
    Ok(Json(Confirmation::new("Task deleted successfully")))
}

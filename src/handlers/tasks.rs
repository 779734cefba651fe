use axum::extract::{Path, Query, State};
use axum::{Extension, Json};
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::app::AppState;
use crate::middleware::{Actor, ApiResponse, ApiResult};
use crate::serializers::TaskView;
use crate::services::tasks;

#[derive(Debug, Deserialize)]
pub struct TaskListQuery {
    /// Filter by assigned employee id (honored for managers only)
    pub employee: Option<Uuid>,
    /// Filter by completion status
    pub completed: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CompleteRequest {
    #[serde(default)]
    pub comments: Option<String>,
}

/// GET /api/tasks?employee=<id>&completed=<bool>
pub async fn list(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Query(query): Query<TaskListQuery>,
) -> ApiResult<Vec<TaskView>> {
    Ok(ApiResponse::success(tasks::list(&state.store, &actor, query.employee, query.completed)?))
}

/// GET /api/tasks/:id
pub async fn get(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<Uuid>,
) -> ApiResult<TaskView> {
    Ok(ApiResponse::success(tasks::get(&state.store, &actor, id)?))
}

/// POST /api/tasks - manager only
pub async fn create(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Json(payload): Json<Value>,
) -> ApiResult<TaskView> {
    Ok(ApiResponse::created(tasks::create(&state.store, &actor, payload)?))
}

/// PUT /api/tasks/:id - workers are dispatched to the completion-only path
pub async fn put(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<Uuid>,
    Json(payload): Json<Value>,
) -> ApiResult<TaskView> {
    Ok(ApiResponse::success(tasks::update(&state.store, &actor, id, payload, false)?))
}

/// PATCH /api/tasks/:id - workers are dispatched to the completion-only path
pub async fn patch(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<Uuid>,
    Json(payload): Json<Value>,
) -> ApiResult<TaskView> {
    Ok(ApiResponse::success(tasks::update(&state.store, &actor, id, payload, true)?))
}

/// DELETE /api/tasks/:id
pub async fn delete(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<Uuid>,
) -> ApiResult<()> {
    tasks::delete(&state.store, &actor, id)?;
    Ok(ApiResponse::no_content())
}

/// PATCH /api/tasks/:id/complete
pub async fn complete(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<Uuid>,
    Json(request): Json<CompleteRequest>,
) -> ApiResult<TaskView> {
    Ok(ApiResponse::success(tasks::complete(&state.store, &actor, id, request.comments)?))
}

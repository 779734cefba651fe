use axum::extract::{Path, State};
use axum::{Extension, Json};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::app::AppState;
use crate::middleware::{Actor, ApiResponse, ApiResult};
use crate::serializers::{ChangePasswordRequest, EmployeeView};
use crate::services::employees;

/// GET /api/employees
pub async fn list(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
) -> ApiResult<Vec<EmployeeView>> {
    Ok(ApiResponse::success(employees::list(&state.store, &actor)?))
}

/// GET /api/employees/me - current actor profile
pub async fn me(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
) -> ApiResult<EmployeeView> {
    Ok(ApiResponse::success(employees::me(&state.store, &actor)?))
}

/// GET /api/employees/:id
pub async fn get(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<Uuid>,
) -> ApiResult<EmployeeView> {
    Ok(ApiResponse::success(employees::get(&state.store, &actor, id)?))
}

/// POST /api/employees
pub async fn create(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Json(payload): Json<Value>,
) -> ApiResult<EmployeeView> {
    Ok(ApiResponse::created(employees::create(&state.store, &actor, payload)?))
}

/// PUT /api/employees/:id - full update
pub async fn put(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<Uuid>,
    Json(payload): Json<Value>,
) -> ApiResult<EmployeeView> {
    Ok(ApiResponse::success(employees::update(&state.store, &actor, id, payload, false)?))
}

/// PATCH /api/employees/:id - partial update
pub async fn patch(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<Uuid>,
    Json(payload): Json<Value>,
) -> ApiResult<EmployeeView> {
    Ok(ApiResponse::success(employees::update(&state.store, &actor, id, payload, true)?))
}

/// DELETE /api/employees/:id
pub async fn delete(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<Uuid>,
) -> ApiResult<()> {
    employees::delete(&state.store, &actor, id)?;
    Ok(ApiResponse::no_content())
}

/// PATCH /api/employees/:id/change-password
pub async fn change_password(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<Uuid>,
    Json(request): Json<ChangePasswordRequest>,
) -> ApiResult<Value> {
    employees::change_password(&state.store, &actor, id, request)?;
    Ok(ApiResponse::success(json!({"message": "password changed"})))
}

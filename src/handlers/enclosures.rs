use axum::extract::{Path, State};
use axum::{Extension, Json};
use serde_json::Value;
use uuid::Uuid;

use crate::app::AppState;
use crate::middleware::{Actor, ApiResponse, ApiResult};
use crate::serializers::EnclosureView;
use crate::services::enclosures;

/// GET /api/enclosures - ordered by name
pub async fn list(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
) -> ApiResult<Vec<EnclosureView>> {
    Ok(ApiResponse::success(enclosures::list(&state.store, &actor)?))
}

/// GET /api/enclosures/:id
pub async fn get(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<Uuid>,
) -> ApiResult<EnclosureView> {
    Ok(ApiResponse::success(enclosures::get(&state.store, &actor, id)?))
}

/// POST /api/enclosures
pub async fn create(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Json(payload): Json<Value>,
) -> ApiResult<EnclosureView> {
    Ok(ApiResponse::created(enclosures::create(&state.store, &actor, payload)?))
}

/// PUT /api/enclosures/:id
pub async fn put(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<Uuid>,
    Json(payload): Json<Value>,
) -> ApiResult<EnclosureView> {
    Ok(ApiResponse::success(enclosures::update(&state.store, &actor, id, payload, false)?))
}

/// PATCH /api/enclosures/:id
pub async fn patch(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<Uuid>,
    Json(payload): Json<Value>,
) -> ApiResult<EnclosureView> {
    Ok(ApiResponse::success(enclosures::update(&state.store, &actor, id, payload, true)?))
}

/// DELETE /api/enclosures/:id
pub async fn delete(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<Uuid>,
) -> ApiResult<()> {
    enclosures::delete(&state.store, &actor, id)?;
    Ok(ApiResponse::no_content())
}

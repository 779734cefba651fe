use axum::extract::{Path, Query, State};
use axum::{Extension, Json};
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::app::AppState;
use crate::middleware::{Actor, ApiResponse, ApiResult};
use crate::serializers::AnimalView;
use crate::services::animals;

#[derive(Debug, Deserialize)]
pub struct AnimalListQuery {
    /// Filter by enclosure id
    pub enclosure: Option<Uuid>,
}

/// GET /api/animals?enclosure=<id>
pub async fn list(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Query(query): Query<AnimalListQuery>,
) -> ApiResult<Vec<AnimalView>> {
    Ok(ApiResponse::success(animals::list(&state.store, &actor, query.enclosure)?))
}

/// GET /api/animals/:id
pub async fn get(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<Uuid>,
) -> ApiResult<AnimalView> {
    Ok(ApiResponse::success(animals::get(&state.store, &actor, id)?))
}

/// POST /api/animals
pub async fn create(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Json(payload): Json<Value>,
) -> ApiResult<AnimalView> {
    Ok(ApiResponse::created(animals::create(&state.store, &actor, payload)?))
}

/// PUT /api/animals/:id - workers are dispatched to the health-only path
pub async fn put(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<Uuid>,
    Json(payload): Json<Value>,
) -> ApiResult<AnimalView> {
    Ok(ApiResponse::success(animals::update(&state.store, &actor, id, payload, false)?))
}

/// PATCH /api/animals/:id - workers are dispatched to the health-only path
pub async fn patch(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<Uuid>,
    Json(payload): Json<Value>,
) -> ApiResult<AnimalView> {
    Ok(ApiResponse::success(animals::update(&state.store, &actor, id, payload, true)?))
}

/// DELETE /api/animals/:id
pub async fn delete(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<Uuid>,
) -> ApiResult<()> {
    animals::delete(&state.store, &actor, id)?;
    Ok(ApiResponse::no_content())
}

use axum::extract::State;
use axum::Extension;

use crate::app::AppState;
use crate::middleware::{Actor, ApiResponse, ApiResult};
use crate::services::dashboard::{self, DashboardView};

/// GET /api/dashboard - profile plus aggregate counts; workers additionally
/// get their own task counts.
pub async fn get(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
) -> ApiResult<DashboardView> {
    Ok(ApiResponse::success(dashboard::get(&state.store, &actor)?))
}

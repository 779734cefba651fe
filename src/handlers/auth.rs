use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::app::AppState;
use crate::auth::{generate_jwt, verify_password, Claims};
use crate::config;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::serializers::EmployeeView;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub expires_in: u64,
    pub user: EmployeeView,
}

/// POST /auth/login - verify credentials and issue a session token.
/// The failure message is identical for unknown users, wrong passwords and
/// deactivated accounts.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<LoginResponse> {
    let employee = state
        .store
        .find_employee_by_username(&request.username)
        .ok_or_else(|| ApiError::unauthorized("invalid username or password"))?;

    if !employee.is_active || !verify_password(&request.password, &employee.password_hash) {
        return Err(ApiError::unauthorized("invalid username or password"));
    }

    let claims = Claims::new(&employee);
    let token = generate_jwt(&claims).map_err(|e| {
        tracing::error!("token generation failed: {}", e);
        ApiError::internal_server_error("failed to issue session token")
    })?;

    tracing::info!(username = %employee.username, "login succeeded");
    Ok(ApiResponse::success(LoginResponse {
        token,
        expires_in: config::config().security.jwt_expiry_hours * 3600,
        user: EmployeeView::from(&employee),
    }))
}

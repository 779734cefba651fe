use std::sync::Arc;

use axum::routing::{get, patch, post};
use axum::Router;
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers;
use crate::middleware::jwt_auth_middleware;
use crate::store::ZooStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ZooStore>,
}

pub fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Public auth routes
        .merge(auth_public_routes(state.clone()))
        // Protected API
        .nest("/api", api_routes(state))
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn auth_public_routes(state: AppState) -> Router {
    Router::new().route("/auth/login", post(handlers::auth::login)).with_state(state)
}

fn api_routes(state: AppState) -> Router {
    use handlers::{animals, dashboard, employees, enclosures, tasks};

    Router::new()
        // Employees
        .route("/employees", get(employees::list).post(employees::create))
        .route("/employees/me", get(employees::me))
        .route(
            "/employees/:id",
            get(employees::get)
                .put(employees::put)
                .patch(employees::patch)
                .delete(employees::delete),
        )
        .route("/employees/:id/change-password", patch(employees::change_password))
        // Enclosures
        .route("/enclosures", get(enclosures::list).post(enclosures::create))
        .route(
            "/enclosures/:id",
            get(enclosures::get)
                .put(enclosures::put)
                .patch(enclosures::patch)
                .delete(enclosures::delete),
        )
        // Animals
        .route("/animals", get(animals::list).post(animals::create))
        .route(
            "/animals/:id",
            get(animals::get).put(animals::put).patch(animals::patch).delete(animals::delete),
        )
        // Tasks
        .route("/tasks", get(tasks::list).post(tasks::create))
        .route(
            "/tasks/:id",
            get(tasks::get).put(tasks::put).patch(tasks::patch).delete(tasks::delete),
        )
        .route("/tasks/:id/complete", patch(tasks::complete))
        // Dashboard
        .route("/dashboard", get(dashboard::get))
        // Every /api route requires a valid session token
        .layer(axum::middleware::from_fn(jwt_auth_middleware))
        .with_state(state)
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "success": true,
        "data": {
            "name": "Zoo API",
            "version": version,
            "description": "Role-based zoo management backend built with Rust (Axum)",
            "endpoints": {
                "home": "/ (public)",
                "login": "/auth/login (public - token acquisition)",
                "employees": "/api/employees[/:id] (protected)",
                "enclosures": "/api/enclosures[/:id] (protected)",
                "animals": "/api/animals[/:id] (protected)",
                "tasks": "/api/tasks[/:id] (protected)",
                "dashboard": "/api/dashboard (protected)",
            }
        }
    }))
}

async fn health() -> axum::response::Json<Value> {
    axum::response::Json(json!({
        "success": true,
        "data": {
            "status": "ok",
            "timestamp": chrono::Utc::now()
        }
    }))
}

use std::sync::Arc;

use anyhow::Result;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use zoo_api::app::{app, AppState};
use zoo_api::auth::hash_password;
use zoo_api::models::{Employee, Role};
use zoo_api::store::ZooStore;

/// Seeded credential for every test employee.
pub const PASSWORD: &str = "correct-horse";

/// In-process test harness: the full router over a fresh store, driven
/// with oneshot requests. No port, no spawned process.
pub struct TestApp {
    router: Router,
    pub store: Arc<ZooStore>,
}

impl TestApp {
    pub fn new() -> Self {
        let store = Arc::new(ZooStore::new());
        let router = app(AppState { store: store.clone() });
        Self { router, store }
    }

    pub fn seed_employee(&self, username: &str, role: Role) -> Employee {
        self.store
            .insert_employee(Employee {
                id: Uuid::new_v4(),
                username: username.to_string(),
                password_hash: hash_password(PASSWORD),
                first_name: "Jan".to_string(),
                last_name: username.to_string(),
                role,
                is_staff: role.is_manager(),
                is_active: true,
                enclosure_ids: vec![],
            })
            .expect("seed employee")
    }

    pub async fn login(&self, username: &str) -> Result<String> {
        let (status, body) = self
            .request(
                Method::POST,
                "/auth/login",
                None,
                Some(json!({"username": username, "password": PASSWORD})),
            )
            .await?;
        anyhow::ensure!(status == StatusCode::OK, "login failed: {}", body);
        Ok(body["data"]["token"].as_str().expect("token in login response").to_string())
    }

    pub async fn get(&self, path: &str, token: Option<&str>) -> Result<(StatusCode, Value)> {
        self.request(Method::GET, path, token, None).await
    }

    pub async fn post(
        &self,
        path: &str,
        token: Option<&str>,
        body: Value,
    ) -> Result<(StatusCode, Value)> {
        self.request(Method::POST, path, token, Some(body)).await
    }

    pub async fn put(
        &self,
        path: &str,
        token: Option<&str>,
        body: Value,
    ) -> Result<(StatusCode, Value)> {
        self.request(Method::PUT, path, token, Some(body)).await
    }

    pub async fn patch(
        &self,
        path: &str,
        token: Option<&str>,
        body: Value,
    ) -> Result<(StatusCode, Value)> {
        self.request(Method::PATCH, path, token, Some(body)).await
    }

    pub async fn delete(&self, path: &str, token: Option<&str>) -> Result<(StatusCode, Value)> {
        self.request(Method::DELETE, path, token, None).await
    }

    pub async fn request(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> Result<(StatusCode, Value)> {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(v) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(v.to_string()))?,
            None => builder.body(Body::empty())?,
        };

        let response = self.router.clone().oneshot(request).await?;
        let status = response.status();
        let bytes = response.into_body().collect().await?.to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)?
        };
        Ok((status, value))
    }
}

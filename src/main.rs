use std::sync::Arc;

use uuid::Uuid;

use zoo_api::app::{app, AppState};
use zoo_api::auth::hash_password;
use zoo_api::models::{Employee, Role};
use zoo_api::store::ZooStore;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up ZOO_JWT_SECRET etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Initialize configuration (this loads the config singleton)
    let config = zoo_api::config::config();
    tracing::info!("Starting Zoo API in {:?} mode", config.environment);

    let store = Arc::new(ZooStore::new());
    bootstrap_admin(&store);

    let app = app(AppState { store });

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    println!("Zoo API server listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

/// Provision an initial manager account from ZOO_ADMIN_USERNAME and
/// ZOO_ADMIN_PASSWORD so a fresh deployment has a way in. Skipped when
/// either variable is missing.
fn bootstrap_admin(store: &ZooStore) {
    let (Ok(username), Ok(password)) =
        (std::env::var("ZOO_ADMIN_USERNAME"), std::env::var("ZOO_ADMIN_PASSWORD"))
    else {
        tracing::warn!("ZOO_ADMIN_USERNAME/ZOO_ADMIN_PASSWORD not set; no admin provisioned");
        return;
    };

    let admin = Employee {
        id: Uuid::new_v4(),
        username,
        password_hash: hash_password(&password),
        first_name: "Zoo".to_string(),
        last_name: "Admin".to_string(),
        role: Role::Manager,
        is_staff: true,
        is_active: true,
        enclosure_ids: vec![],
    };

    match store.insert_employee(admin) {
        Ok(admin) => tracing::info!(username = %admin.username, "admin account provisioned"),
        Err(e) => tracing::error!("failed to provision admin account: {}", e),
    }
}

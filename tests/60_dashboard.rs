mod common;

use anyhow::Result;
use axum::http::StatusCode;
use serde_json::json;

use common::TestApp;
use zoo_api::models::Role;

#[tokio::test]
async fn manager_dashboard_reports_zoo_wide_statistics() -> Result<()> {
    let app = TestApp::new();
    app.seed_employee("boss", Role::Manager);
    let keeper = app.seed_employee("keeper", Role::Worker);
    let boss_token = app.login("boss").await?;
    let keeper_token = app.login("keeper").await?;

    let (_, enc) = app.post("/api/enclosures", Some(&boss_token), json!({"name": "Savannah"})).await?;
    let enc_id = enc["data"]["id"].as_str().unwrap().to_string();
    app.post(
        "/api/animals",
        Some(&boss_token),
        json!({"species": "Lion", "name": "Leo", "gender": "M", "enclosure_id": enc_id}),
    )
    .await?;

    let (_, done) = app
        .post(
            "/api/tasks",
            Some(&boss_token),
            json!({
                "task_timestamp": "2026-08-24T08:00:00Z",
                "task_type": "feeding",
                "employee_id": keeper.id
            }),
        )
        .await?;
    app.post(
        "/api/tasks",
        Some(&boss_token),
        json!({"task_timestamp": "2026-08-24T09:00:00Z", "task_type": "cleaning"}),
    )
    .await?;
    let done_id = done["data"]["id"].as_str().unwrap().to_string();
    app.patch(&format!("/api/tasks/{}/complete", done_id), Some(&keeper_token), json!({})).await?;

    let (status, body) = app.get("/api/dashboard", Some(&boss_token)).await?;
    assert_eq!(status, StatusCode::OK, "{}", body);
    assert_eq!(body["data"]["user"]["username"], "boss");

    let stats = &body["data"]["statistics"];
    assert_eq!(stats["total_employees"], 2);
    assert_eq!(stats["total_enclosures"], 1);
    assert_eq!(stats["total_animals"], 1);
    assert_eq!(stats["total_tasks"], 2);
    assert_eq!(stats["completed_tasks"], 1);
    assert_eq!(stats["pending_tasks"], 1);

    // Managers get no personal task block at all
    assert!(body["data"].get("my_tasks").is_none());

    Ok(())
}

#[tokio::test]
async fn worker_dashboard_includes_personal_task_counts() -> Result<()> {
    let app = TestApp::new();
    app.seed_employee("boss", Role::Manager);
    let keeper = app.seed_employee("keeper", Role::Worker);
    app.seed_employee("keeper2", Role::Worker);
    let boss_token = app.login("boss").await?;
    let keeper_token = app.login("keeper").await?;

    for hour in ["08", "09", "10"] {
        app.post(
            "/api/tasks",
            Some(&boss_token),
            json!({
                "task_timestamp": format!("2026-08-24T{}:00:00Z", hour),
                "task_type": "feeding",
                "employee_id": keeper.id
            }),
        )
        .await?;
    }
    // A colleague's task must not leak into the counts
    let other = app.seed_employee("keeper3", Role::Worker);
    app.post(
        "/api/tasks",
        Some(&boss_token),
        json!({
            "task_timestamp": "2026-08-24T11:00:00Z",
            "task_type": "cleaning",
            "employee_id": other.id
        }),
    )
    .await?;

    let (_, mine) = app.get("/api/tasks", Some(&keeper_token)).await?;
    let first = mine["data"][0]["id"].as_str().unwrap().to_string();
    app.patch(&format!("/api/tasks/{}/complete", first), Some(&keeper_token), json!({})).await?;

    let (status, body) = app.get("/api/dashboard", Some(&keeper_token)).await?;
    assert_eq!(status, StatusCode::OK, "{}", body);
    assert_eq!(body["data"]["user"]["username"], "keeper");
    assert_eq!(body["data"]["statistics"]["total_tasks"], 4);

    let my = &body["data"]["my_tasks"];
    assert_eq!(my["total"], 3);
    assert_eq!(my["completed"], 1);
    assert_eq!(my["pending"], 2);

    Ok(())
}

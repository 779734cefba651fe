mod common;

use anyhow::Result;
use axum::http::StatusCode;
use serde_json::{json, Value};

use common::TestApp;
use zoo_api::models::Role;

async fn create_task(app: &TestApp, token: &str, employee_id: Option<&str>) -> Result<String> {
    let mut payload = json!({
        "task_timestamp": "2026-08-24T08:00:00Z",
        "task_type": "feeding"
    });
    if let Some(id) = employee_id {
        payload["employee_id"] = Value::String(id.to_string());
    }
    let (status, body) = app.post("/api/tasks", Some(token), payload).await?;
    anyhow::ensure!(status == StatusCode::CREATED, "task create failed: {}", body);
    Ok(body["data"]["id"].as_str().unwrap().to_string())
}

#[tokio::test]
async fn worker_lists_are_scoped_to_own_assignments() -> Result<()> {
    let app = TestApp::new();
    app.seed_employee("boss", Role::Manager);
    let keeper = app.seed_employee("keeper", Role::Worker);
    let other = app.seed_employee("keeper2", Role::Worker);
    let boss_token = app.login("boss").await?;
    let keeper_token = app.login("keeper").await?;

    let mine = create_task(&app, &boss_token, Some(&keeper.id.to_string())).await?;
    create_task(&app, &boss_token, Some(&other.id.to_string())).await?;
    create_task(&app, &boss_token, None).await?;

    // No explicit filter: worker sees only their own tasks
    let (_, body) = app.get("/api/tasks", Some(&keeper_token)).await?;
    let tasks = body["data"].as_array().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["id"], mine.as_str());
    assert_eq!(tasks[0]["employee_name"], "Jan keeper");

    // Manager with no filter sees everything
    let (_, body) = app.get("/api/tasks", Some(&boss_token)).await?;
    assert_eq!(body["data"].as_array().unwrap().len(), 3);

    // Manager filtering by employee gets just that employee's tasks
    let (_, body) = app.get(&format!("/api/tasks?employee={}", other.id), Some(&boss_token)).await?;
    let tasks = body["data"].as_array().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["employee_id"], other.id.to_string());

    // The employee filter is manager-only: a worker stays scoped to themselves
    let (_, body) = app.get(&format!("/api/tasks?employee={}", other.id), Some(&keeper_token)).await?;
    let tasks = body["data"].as_array().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["id"], mine.as_str());

    Ok(())
}

#[tokio::test]
async fn completion_filter_applies_to_both_roles() -> Result<()> {
    let app = TestApp::new();
    app.seed_employee("boss", Role::Manager);
    let keeper = app.seed_employee("keeper", Role::Worker);
    let boss_token = app.login("boss").await?;
    let keeper_token = app.login("keeper").await?;

    let done = create_task(&app, &boss_token, Some(&keeper.id.to_string())).await?;
    create_task(&app, &boss_token, Some(&keeper.id.to_string())).await?;
    app.patch(&format!("/api/tasks/{}/complete", done), Some(&keeper_token), json!({})).await?;

    let (_, body) = app.get("/api/tasks?completed=true", Some(&boss_token)).await?;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let (_, body) = app.get("/api/tasks?completed=false", Some(&keeper_token)).await?;
    let tasks = body["data"].as_array().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["is_completed"], false);

    Ok(())
}

#[tokio::test]
async fn only_managers_create_tasks() -> Result<()> {
    let app = TestApp::new();
    app.seed_employee("boss", Role::Manager);
    app.seed_employee("keeper", Role::Worker);
    let keeper_token = app.login("keeper").await?;

    let (status, _) = app
        .post(
            "/api/tasks",
            Some(&keeper_token),
            json!({"task_timestamp": "2026-08-24T08:00:00Z", "task_type": "feeding"}),
        )
        .await?;
    assert_eq!(status, StatusCode::FORBIDDEN);

    Ok(())
}

#[tokio::test]
async fn complete_is_allowed_for_assignee_and_managers_only() -> Result<()> {
    let app = TestApp::new();
    app.seed_employee("boss", Role::Manager);
    let keeper = app.seed_employee("keeper", Role::Worker);
    app.seed_employee("keeper2", Role::Worker);
    let boss_token = app.login("boss").await?;
    let keeper_token = app.login("keeper").await?;
    let stranger_token = app.login("keeper2").await?;

    let task = create_task(&app, &boss_token, Some(&keeper.id.to_string())).await?;
    let path = format!("/api/tasks/{}/complete", task);

    // A different worker is denied
    let (status, body) = app.patch(&path, Some(&stranger_token), json!({})).await?;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], "FORBIDDEN");

    // The assignee completes it; empty comments leave the field alone
    let (status, body) = app.patch(&path, Some(&keeper_token), json!({"comments": ""})).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["is_completed"], true);
    assert!(body["data"]["comments"].is_null());

    // Non-empty comments overwrite
    let (_, body) = app.patch(&path, Some(&keeper_token), json!({"comments": "done early"})).await?;
    assert_eq!(body["data"]["comments"], "done early");

    // A manager may complete anyone's task
    let other = create_task(&app, &boss_token, Some(&keeper.id.to_string())).await?;
    let (status, body) = app
        .patch(&format!("/api/tasks/{}/complete", other), Some(&boss_token), json!({}))
        .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["is_completed"], true);

    Ok(())
}

#[tokio::test]
async fn worker_updates_are_limited_to_completion_and_comments() -> Result<()> {
    let app = TestApp::new();
    app.seed_employee("boss", Role::Manager);
    let keeper = app.seed_employee("keeper", Role::Worker);
    let boss_token = app.login("boss").await?;
    let keeper_token = app.login("keeper").await?;

    let task = create_task(&app, &boss_token, Some(&keeper.id.to_string())).await?;
    let path = format!("/api/tasks/{}", task);

    let (status, body) = app
        .patch(&path, Some(&keeper_token), json!({"is_completed": true, "comments": "all fed"}))
        .await?;
    assert_eq!(status, StatusCode::OK, "{}", body);
    assert_eq!(body["data"]["is_completed"], true);
    assert_eq!(body["data"]["comments"], "all fed");

    // Retyping, rescheduling or reassigning is rejected wholesale
    for payload in [
        json!({"task_type": "cleaning"}),
        json!({"task_timestamp": "2027-01-01T00:00:00Z"}),
        json!({"is_completed": false, "employee_id": null}),
    ] {
        let (status, body) = app.patch(&path, Some(&keeper_token), payload).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", body);
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }
    let (_, body) = app.get(&path, Some(&keeper_token)).await?;
    assert_eq!(body["data"]["task_type"], "feeding");

    // No one-way guard: the assignee may flip completion back
    let (status, body) = app.patch(&path, Some(&keeper_token), json!({"is_completed": false})).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["is_completed"], false);

    Ok(())
}

#[tokio::test]
async fn foreign_tasks_are_forbidden_for_workers() -> Result<()> {
    let app = TestApp::new();
    app.seed_employee("boss", Role::Manager);
    let keeper = app.seed_employee("keeper", Role::Worker);
    app.seed_employee("keeper2", Role::Worker);
    let boss_token = app.login("boss").await?;
    let stranger_token = app.login("keeper2").await?;

    let task = create_task(&app, &boss_token, Some(&keeper.id.to_string())).await?;
    let path = format!("/api/tasks/{}", task);

    // Reads and writes on someone else's task: forbidden, not not-found
    let (status, body) = app.get(&path, Some(&stranger_token)).await?;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], "FORBIDDEN");

    let (status, _) =
        app.patch(&path, Some(&stranger_token), json!({"is_completed": true})).await?;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // A genuinely missing id is a 404 for a manager
    let (status, _) =
        app.get(&format!("/api/tasks/{}", uuid::Uuid::new_v4()), Some(&boss_token)).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn manager_may_update_and_reassign_any_task() -> Result<()> {
    let app = TestApp::new();
    app.seed_employee("boss", Role::Manager);
    let keeper = app.seed_employee("keeper", Role::Worker);
    let other = app.seed_employee("keeper2", Role::Worker);
    let boss_token = app.login("boss").await?;

    let task = create_task(&app, &boss_token, Some(&keeper.id.to_string())).await?;
    let path = format!("/api/tasks/{}", task);

    let (status, body) = app
        .patch(
            &path,
            Some(&boss_token),
            json!({"task_type": "vet visit", "employee_id": other.id}),
        )
        .await?;
    assert_eq!(status, StatusCode::OK, "{}", body);
    assert_eq!(body["data"]["task_type"], "vet visit");
    assert_eq!(body["data"]["employee_id"], other.id.to_string());
    assert_eq!(body["data"]["employee_name"], "Jan keeper2");

    // Unassigning with an explicit null
    let (_, body) = app.patch(&path, Some(&boss_token), json!({"employee_id": null})).await?;
    assert!(body["data"]["employee_id"].is_null());

    let (status, _) = app.delete(&path, Some(&boss_token)).await?;
    assert_eq!(status, StatusCode::NO_CONTENT);

    Ok(())
}

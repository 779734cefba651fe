use serde_json::Value;
use uuid::Uuid;

use crate::error::ApiError;
use crate::middleware::Actor;
use crate::models::Task;
use crate::policy;
use crate::serializers::{parse_payload, TaskPayload, TaskUpdate, TaskView};
use crate::store::ZooStore;

fn view(store: &ZooStore, task: &Task) -> TaskView {
    let employee_name = task.employee_id.and_then(|id| store.employee_name(id));
    let enclosure_name = task.enclosure_id.and_then(|id| store.enclosure_name(id));
    TaskView::new(task, employee_name, enclosure_name)
}

/// Tasks newest first. Workers see only their own assignments before any
/// explicit filter applies; the employee filter is honored for managers only.
pub fn list(
    store: &ZooStore,
    actor: &Actor,
    employee_id: Option<Uuid>,
    completed: Option<bool>,
) -> Result<Vec<TaskView>, ApiError> {
    let mut tasks = store.list_tasks();

    // Role scoping first
    if !actor.is_manager() {
        tasks.retain(|t| t.is_assigned_to(actor.id));
    }

    // Explicit filters after scoping
    if actor.is_manager() {
        if let Some(employee_id) = employee_id {
            tasks.retain(|t| t.employee_id == Some(employee_id));
        }
    }
    if let Some(completed) = completed {
        tasks.retain(|t| t.is_completed == completed);
    }

    Ok(tasks.iter().map(|t| view(store, t)).collect())
}

pub fn get(store: &ZooStore, actor: &Actor, id: Uuid) -> Result<TaskView, ApiError> {
    let task = store.get_task(id)?;
    if !policy::can_view_task(actor, &task) {
        return Err(ApiError::forbidden("this task is not assigned to you"));
    }
    Ok(view(store, &task))
}

/// Tasks are created exclusively by managers.
pub fn create(store: &ZooStore, actor: &Actor, payload: Value) -> Result<TaskView, ApiError> {
    policy::require_manager(actor, "create tasks")?;
    let payload: TaskPayload = parse_payload(payload, "task")?;
    let task = store.insert_task(Task {
        id: Uuid::new_v4(),
        task_timestamp: payload.task_timestamp,
        employee_id: payload.employee_id,
        enclosure_id: payload.enclosure_id,
        task_type: payload.task_type,
        comments: payload.comments,
        is_completed: payload.is_completed,
    })?;
    Ok(view(store, &task))
}

/// Update dispatch: workers take the completion-only restricted path on
/// their own tasks; managers get the full schema on any task.
pub fn update(
    store: &ZooStore,
    actor: &Actor,
    id: Uuid,
    payload: Value,
    partial: bool,
) -> Result<TaskView, ApiError> {
    let existing = store.get_task(id)?;
    policy::require_task_access(actor, &existing)?;

    let updated = match TaskUpdate::parse(actor.role, payload, partial)? {
        TaskUpdate::Replace(full) => Task {
            id: existing.id,
            task_timestamp: full.task_timestamp,
            employee_id: full.employee_id,
            enclosure_id: full.enclosure_id,
            task_type: full.task_type,
            comments: full.comments,
            is_completed: full.is_completed,
        },
        TaskUpdate::Patch(patch) => {
            let mut task = existing;
            if let Some(v) = patch.task_timestamp {
                task.task_timestamp = v;
            }
            if let Some(v) = patch.employee_id {
                task.employee_id = v;
            }
            if let Some(v) = patch.enclosure_id {
                task.enclosure_id = v;
            }
            if let Some(v) = patch.task_type {
                task.task_type = v;
            }
            if let Some(v) = patch.comments {
                task.comments = Some(v);
            }
            if let Some(v) = patch.is_completed {
                task.is_completed = v;
            }
            task
        }
        TaskUpdate::Completion(patch) => {
            let mut task = existing;
            if let Some(v) = patch.is_completed {
                task.is_completed = v;
            }
            if let Some(v) = patch.comments {
                task.comments = Some(v);
            }
            task
        }
    };

    let updated = store.put_task(updated)?;
    Ok(view(store, &updated))
}

pub fn delete(store: &ZooStore, actor: &Actor, id: Uuid) -> Result<(), ApiError> {
    policy::require_manager(actor, "delete tasks")?;
    store.delete_task(id)?;
    Ok(())
}

/// Mark a task completed. Allowed for the assigned employee or any manager;
/// non-empty comments overwrite the existing ones.
pub fn complete(
    store: &ZooStore,
    actor: &Actor,
    id: Uuid,
    comments: Option<String>,
) -> Result<TaskView, ApiError> {
    let mut task = store.get_task(id)?;
    policy::require_task_access(actor, &task)?;

    task.is_completed = true;
    if let Some(comments) = comments {
        if !comments.is_empty() {
            task.comments = Some(comments);
        }
    }

    let task = store.put_task(task)?;
    tracing::info!(task_id = %task.id, actor = %actor.username, "task completed");
    Ok(view(store, &task))
}

//! Authorization Policy.
//!
//! Pure checks over (actor, action, optional target instance). Denials are
//! `ApiError::Forbidden` (403), always distinct from not-found. Precedence:
//! role-level incapability is checked before any store lookup; instance-scope
//! checks (ownership, field restrictions) run after the record is resolved.

use serde_json::Value;
use uuid::Uuid;

use crate::error::ApiError;
use crate::middleware::Actor;
use crate::models::Task;

/// Fields a worker may touch on their own assigned task.
pub const WORKER_TASK_FIELDS: &[&str] = &["is_completed", "comments"];

/// Fields a worker may touch on an existing animal.
pub const WORKER_ANIMAL_FIELDS: &[&str] = &["health"];

/// Manager-only action on a resource type.
pub fn require_manager(actor: &Actor, action: &str) -> Result<(), ApiError> {
    if actor.is_manager() {
        return Ok(());
    }
    tracing::debug!(actor = %actor.username, action, "denied: manager role required");
    Err(ApiError::forbidden(format!("only managers may {}", action)))
}

/// Actions an actor may perform on their own Employee record, or a manager
/// on anyone's (profile read, password change).
pub fn require_self_or_manager(actor: &Actor, target_id: Uuid) -> Result<(), ApiError> {
    if actor.is_manager() || actor.id == target_id {
        return Ok(());
    }
    tracing::debug!(actor = %actor.username, %target_id, "denied: not owner or manager");
    Err(ApiError::forbidden("you may only access your own employee record"))
}

/// Deleting one's own Employee record is denied even for managers.
pub fn deny_self_delete(actor: &Actor, target_id: Uuid) -> Result<(), ApiError> {
    if actor.id == target_id {
        return Err(ApiError::forbidden("you may not delete your own employee record"));
    }
    Ok(())
}

/// Mutation access to a task: the assigned employee or any manager.
pub fn require_task_access(actor: &Actor, task: &Task) -> Result<(), ApiError> {
    if actor.is_manager() || task.is_assigned_to(actor.id) {
        return Ok(());
    }
    tracing::debug!(actor = %actor.username, task_id = %task.id, "denied: task not assigned to actor");
    Err(ApiError::forbidden("this task is not assigned to you"))
}

/// Whether the task is visible to the actor at all (workers see only their own).
pub fn can_view_task(actor: &Actor, task: &Task) -> bool {
    actor.is_manager() || task.is_assigned_to(actor.id)
}

/// All-or-nothing field restriction for worker updates: if the payload
/// touches any key outside `allowed`, the whole request is rejected and
/// nothing is applied. Disallowed keys are reported per field.
pub fn require_allowed_fields(
    payload: &Value,
    allowed: &[&str],
    resource: &str,
) -> Result<(), ApiError> {
    let object = payload
        .as_object()
        .ok_or_else(|| ApiError::validation_error("payload must be a JSON object", None))?;

    let disallowed: Vec<&String> =
        object.keys().filter(|k| !allowed.contains(&k.as_str())).collect();

    if disallowed.is_empty() {
        return Ok(());
    }

    let field_errors = disallowed
        .into_iter()
        .map(|k| (k.clone(), format!("workers may not modify this {} field", resource)))
        .collect();
    Err(ApiError::validation_error(
        format!("workers may only modify {} on a {}", allowed.join(", "), resource),
        Some(field_errors),
    ))
}

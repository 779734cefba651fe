use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::{Role, Task};
use crate::policy;

use super::{double_option, parse_payload};

/// Outbound task shape: raw foreign keys plus resolved display names.
#[derive(Debug, Serialize)]
pub struct TaskView {
    pub id: Uuid,
    pub task_timestamp: DateTime<Utc>,
    pub employee_id: Option<Uuid>,
    pub employee_name: Option<String>,
    pub enclosure_id: Option<Uuid>,
    pub enclosure_name: Option<String>,
    pub task_type: String,
    pub comments: Option<String>,
    pub is_completed: bool,
}

impl TaskView {
    pub fn new(task: &Task, employee_name: Option<String>, enclosure_name: Option<String>) -> Self {
        Self {
            id: task.id,
            task_timestamp: task.task_timestamp,
            employee_id: task.employee_id,
            employee_name,
            enclosure_id: task.enclosure_id,
            enclosure_name,
            task_type: task.task_type.clone(),
            comments: task.comments.clone(),
            is_completed: task.is_completed,
        }
    }
}

/// Full task payload (create / manager PUT).
#[derive(Debug, Deserialize)]
pub struct TaskPayload {
    pub task_timestamp: DateTime<Utc>,
    #[serde(default)]
    pub employee_id: Option<Uuid>,
    #[serde(default)]
    pub enclosure_id: Option<Uuid>,
    pub task_type: String,
    #[serde(default)]
    pub comments: Option<String>,
    #[serde(default)]
    pub is_completed: bool,
}

/// Partial task update (manager PATCH).
#[derive(Debug, Default, Deserialize)]
pub struct TaskPatch {
    pub task_timestamp: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "double_option")]
    pub employee_id: Option<Option<Uuid>>,
    #[serde(default, deserialize_with = "double_option")]
    pub enclosure_id: Option<Option<Uuid>>,
    pub task_type: Option<String>,
    pub comments: Option<String>,
    pub is_completed: Option<bool>,
}

/// Worker variant: completion flag and comments only. There is no one-way
/// guard on `is_completed`; an assignee may flip it back.
#[derive(Debug, Default, Deserialize)]
pub struct TaskCompletionPatch {
    pub is_completed: Option<bool>,
    pub comments: Option<String>,
}

/// Update variant, selected from role and action before validation.
#[derive(Debug)]
pub enum TaskUpdate {
    Replace(TaskPayload),
    Patch(TaskPatch),
    Completion(TaskCompletionPatch),
}

impl TaskUpdate {
    pub fn parse(role: Role, payload: Value, partial: bool) -> Result<Self, ApiError> {
        match role {
            Role::Worker => {
                policy::require_allowed_fields(&payload, policy::WORKER_TASK_FIELDS, "task")?;
                Ok(TaskUpdate::Completion(parse_payload(payload, "task completion")?))
            }
            Role::Manager if partial => Ok(TaskUpdate::Patch(parse_payload(payload, "task")?)),
            Role::Manager => Ok(TaskUpdate::Replace(parse_payload(payload, "task")?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn worker_updates_dispatch_to_the_completion_variant() {
        let update =
            TaskUpdate::parse(Role::Worker, json!({"is_completed": true, "comments": "done"}), true)
                .unwrap();
        assert!(matches!(update, TaskUpdate::Completion(_)));
    }

    #[test]
    fn worker_may_not_retype_or_reassign() {
        for payload in [
            json!({"task_type": "cleaning"}),
            json!({"employee_id": Uuid::new_v4()}),
            json!({"is_completed": true, "task_timestamp": Utc::now()}),
        ] {
            let err = TaskUpdate::parse(Role::Worker, payload, true).unwrap_err();
            assert_eq!(err.status_code(), 400);
        }
    }

    #[test]
    fn manager_updates_dispatch_by_verb() {
        let patch = TaskUpdate::parse(Role::Manager, json!({"task_type": "vet visit"}), true).unwrap();
        assert!(matches!(patch, TaskUpdate::Patch(_)));

        let replace = TaskUpdate::parse(
            Role::Manager,
            json!({"task_timestamp": Utc::now(), "task_type": "feeding"}),
            false,
        )
        .unwrap();
        assert!(matches!(replace, TaskUpdate::Replace(_)));
    }
}

use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Task {
    pub id: Uuid,
    pub task_timestamp: DateTime<Utc>,
    pub employee_id: Option<Uuid>,
    pub enclosure_id: Option<Uuid>,
    pub task_type: String,
    pub comments: Option<String>,
    pub is_completed: bool,
}

impl Task {
    pub fn is_assigned_to(&self, employee_id: Uuid) -> bool {
        self.employee_id == Some(employee_id)
    }
}

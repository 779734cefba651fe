use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Employee role. Every authorization decision keys off this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Manager,
    Worker,
}

impl Role {
    pub fn is_manager(self) -> bool {
        matches!(self, Role::Manager)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Manager => write!(f, "manager"),
            Role::Worker => write!(f, "worker"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Employee {
    pub id: Uuid,
    pub username: String,
    /// Salted one-way hash. Never serialized outward.
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub is_staff: bool,
    pub is_active: bool,
    /// Enclosures this employee is responsible for (many-to-many).
    /// Updates replace the whole set, never merge.
    pub enclosure_ids: Vec<Uuid>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

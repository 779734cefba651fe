use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Employee, Role};

/// Outbound employee shape. The credential hash is never part of it.
#[derive(Debug, Serialize)]
pub struct EmployeeView {
    pub id: Uuid,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub is_staff: bool,
    pub is_active: bool,
    pub enclosure_ids: Vec<Uuid>,
}

impl From<&Employee> for EmployeeView {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id,
            username: employee.username.clone(),
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            role: employee.role,
            is_staff: employee.is_staff,
            is_active: employee.is_active,
            enclosure_ids: employee.enclosure_ids.clone(),
        }
    }
}

/// Full employee payload (create / PUT). `password` is write-only: it is
/// hashed before persistence and never echoed back. `enclosure_ids`
/// replaces the responsibility set wholesale.
#[derive(Debug, Deserialize)]
pub struct EmployeePayload {
    pub username: String,
    pub password: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    #[serde(default)]
    pub is_staff: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub enclosure_ids: Vec<Uuid>,
}

fn default_true() -> bool {
    true
}

/// Partial employee update (PATCH). Only present fields are applied.
#[derive(Debug, Default, Deserialize)]
pub struct EmployeePatch {
    pub username: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Option<Role>,
    pub is_staff: Option<bool>,
    pub is_active: Option<bool>,
    pub enclosure_ids: Option<Vec<Uuid>>,
}

#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Resolved employee reference: id plus display name, so clients need no
/// secondary lookup.
#[derive(Debug, Serialize)]
pub struct EmployeeRef {
    pub id: Uuid,
    pub name: String,
}

/// Outbound enclosure shape. `current_animal_count` is recomputed at read
/// time from live Animal references; it is never stored or settable.
#[derive(Debug, Serialize)]
pub struct EnclosureView {
    pub id: Uuid,
    pub name: String,
    pub responsible_employees: Vec<EmployeeRef>,
    pub current_animal_count: usize,
}

#[derive(Debug, Deserialize)]
pub struct EnclosurePayload {
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct EnclosurePatch {
    pub name: Option<String>,
}

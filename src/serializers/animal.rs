use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::{Animal, Role};
use crate::policy;

use super::{double_option, parse_payload};

/// Outbound animal shape: raw foreign key plus resolved enclosure name.
#[derive(Debug, Serialize)]
pub struct AnimalView {
    pub id: Uuid,
    pub species: String,
    pub name: String,
    pub gender: String,
    pub health: String,
    pub enclosure_id: Option<Uuid>,
    pub enclosure_name: Option<String>,
}

impl AnimalView {
    pub fn new(animal: &Animal, enclosure_name: Option<String>) -> Self {
        Self {
            id: animal.id,
            species: animal.species.clone(),
            name: animal.name.clone(),
            gender: animal.gender.clone(),
            health: animal.health.clone(),
            enclosure_id: animal.enclosure_id,
            enclosure_name,
        }
    }
}

/// Full animal payload (create / manager PUT).
#[derive(Debug, Deserialize)]
pub struct AnimalPayload {
    pub species: String,
    pub name: String,
    pub gender: String,
    #[serde(default = "default_health")]
    pub health: String,
    #[serde(default)]
    pub enclosure_id: Option<Uuid>,
}

fn default_health() -> String {
    "healthy".to_string()
}

/// Partial animal update (manager PATCH).
#[derive(Debug, Default, Deserialize)]
pub struct AnimalPatch {
    pub species: Option<String>,
    pub name: Option<String>,
    pub gender: Option<String>,
    pub health: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub enclosure_id: Option<Option<Uuid>>,
}

/// Worker variant: the only field a worker may change on an existing animal.
#[derive(Debug, Deserialize)]
pub struct AnimalHealthPatch {
    pub health: String,
}

/// Update variant, selected from role and action before validation.
/// Workers always take the restricted path regardless of HTTP verb.
#[derive(Debug)]
pub enum AnimalUpdate {
    Replace(AnimalPayload),
    Patch(AnimalPatch),
    Health(AnimalHealthPatch),
}

impl AnimalUpdate {
    pub fn parse(role: Role, payload: Value, partial: bool) -> Result<Self, ApiError> {
        match role {
            Role::Worker => {
                policy::require_allowed_fields(&payload, policy::WORKER_ANIMAL_FIELDS, "animal")?;
                Ok(AnimalUpdate::Health(parse_payload(payload, "animal health")?))
            }
            Role::Manager if partial => Ok(AnimalUpdate::Patch(parse_payload(payload, "animal")?)),
            Role::Manager => Ok(AnimalUpdate::Replace(parse_payload(payload, "animal")?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn worker_updates_dispatch_to_the_health_variant() {
        let update = AnimalUpdate::parse(Role::Worker, json!({"health": "injured"}), true).unwrap();
        assert!(matches!(update, AnimalUpdate::Health(_)));
    }

    #[test]
    fn worker_multi_field_update_is_rejected_wholesale() {
        let err = AnimalUpdate::parse(
            Role::Worker,
            json!({"health": "injured", "name": "Leo2"}),
            true,
        )
        .unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn manager_updates_dispatch_by_verb() {
        let patch = AnimalUpdate::parse(Role::Manager, json!({"name": "Leo2"}), true).unwrap();
        assert!(matches!(patch, AnimalUpdate::Patch(_)));

        let replace = AnimalUpdate::parse(
            Role::Manager,
            json!({"species": "Lion", "name": "Leo", "gender": "M"}),
            false,
        )
        .unwrap();
        assert!(matches!(replace, AnimalUpdate::Replace(_)));
    }

    #[test]
    fn manager_put_requires_the_full_schema() {
        let err = AnimalUpdate::parse(Role::Manager, json!({"name": "Leo"}), false).unwrap_err();
        assert_eq!(err.status_code(), 400);
    }
}

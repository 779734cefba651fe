use serde_json::Value;
use uuid::Uuid;

use crate::error::ApiError;
use crate::middleware::Actor;
use crate::models::Enclosure;
use crate::policy;
use crate::serializers::{parse_payload, EmployeeRef, EnclosurePatch, EnclosurePayload, EnclosureView};
use crate::store::ZooStore;

fn view(store: &ZooStore, enclosure: &Enclosure) -> EnclosureView {
    EnclosureView {
        id: enclosure.id,
        name: enclosure.name.clone(),
        responsible_employees: store
            .responsible_employees(enclosure.id)
            .iter()
            .map(|e| EmployeeRef { id: e.id, name: e.full_name() })
            .collect(),
        current_animal_count: store.animal_count(enclosure.id),
    }
}

/// All enclosures ordered by name. Readable by any authenticated actor.
pub fn list(store: &ZooStore, _actor: &Actor) -> Result<Vec<EnclosureView>, ApiError> {
    Ok(store.list_enclosures().iter().map(|e| view(store, e)).collect())
}

pub fn get(store: &ZooStore, _actor: &Actor, id: Uuid) -> Result<EnclosureView, ApiError> {
    let enclosure = store.get_enclosure(id)?;
    Ok(view(store, &enclosure))
}

pub fn create(store: &ZooStore, actor: &Actor, payload: Value) -> Result<EnclosureView, ApiError> {
    policy::require_manager(actor, "create enclosures")?;
    let payload: EnclosurePayload = parse_payload(payload, "enclosure")?;
    let enclosure = store.insert_enclosure(Enclosure { id: Uuid::new_v4(), name: payload.name })?;
    Ok(view(store, &enclosure))
}

pub fn update(
    store: &ZooStore,
    actor: &Actor,
    id: Uuid,
    payload: Value,
    partial: bool,
) -> Result<EnclosureView, ApiError> {
    policy::require_manager(actor, "modify enclosures")?;
    let mut enclosure = store.get_enclosure(id)?;

    if partial {
        let patch: EnclosurePatch = parse_payload(payload, "enclosure")?;
        if let Some(name) = patch.name {
            enclosure.name = name;
        }
    } else {
        let full: EnclosurePayload = parse_payload(payload, "enclosure")?;
        enclosure.name = full.name;
    }

    let enclosure = store.put_enclosure(enclosure)?;
    Ok(view(store, &enclosure))
}

pub fn delete(store: &ZooStore, actor: &Actor, id: Uuid) -> Result<(), ApiError> {
    policy::require_manager(actor, "delete enclosures")?;
    store.delete_enclosure(id)?;
    Ok(())
}

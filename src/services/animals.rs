use serde_json::Value;
use uuid::Uuid;

use crate::error::ApiError;
use crate::middleware::Actor;
use crate::models::Animal;
use crate::policy;
use crate::serializers::{parse_payload, AnimalPayload, AnimalUpdate, AnimalView};
use crate::store::ZooStore;

fn view(store: &ZooStore, animal: &Animal) -> AnimalView {
    let enclosure_name = animal.enclosure_id.and_then(|id| store.enclosure_name(id));
    AnimalView::new(animal, enclosure_name)
}

/// Animals ordered by species then name, optionally filtered by enclosure.
/// Readable by any authenticated actor.
pub fn list(
    store: &ZooStore,
    _actor: &Actor,
    enclosure_id: Option<Uuid>,
) -> Result<Vec<AnimalView>, ApiError> {
    Ok(store.list_animals(enclosure_id).iter().map(|a| view(store, a)).collect())
}

pub fn get(store: &ZooStore, _actor: &Actor, id: Uuid) -> Result<AnimalView, ApiError> {
    let animal = store.get_animal(id)?;
    Ok(view(store, &animal))
}

pub fn create(store: &ZooStore, actor: &Actor, payload: Value) -> Result<AnimalView, ApiError> {
    policy::require_manager(actor, "create animals")?;
    let payload: AnimalPayload = parse_payload(payload, "animal")?;
    let animal = store.insert_animal(Animal {
        id: Uuid::new_v4(),
        species: payload.species,
        name: payload.name,
        gender: payload.gender,
        health: payload.health,
        enclosure_id: payload.enclosure_id,
    })?;
    Ok(view(store, &animal))
}

/// Update dispatch: workers take the health-only restricted path whatever
/// the verb; managers get the full schema (replace on PUT, patch on PATCH).
pub fn update(
    store: &ZooStore,
    actor: &Actor,
    id: Uuid,
    payload: Value,
    partial: bool,
) -> Result<AnimalView, ApiError> {
    // Animals are visible to every role, so the id resolves before field checks
    let existing = store.get_animal(id)?;

    let updated = match AnimalUpdate::parse(actor.role, payload, partial)? {
        AnimalUpdate::Replace(full) => Animal {
            id: existing.id,
            species: full.species,
            name: full.name,
            gender: full.gender,
            health: full.health,
            enclosure_id: full.enclosure_id,
        },
        AnimalUpdate::Patch(patch) => {
            let mut animal = existing;
            if let Some(v) = patch.species {
                animal.species = v;
            }
            if let Some(v) = patch.name {
                animal.name = v;
            }
            if let Some(v) = patch.gender {
                animal.gender = v;
            }
            if let Some(v) = patch.health {
                animal.health = v;
            }
            if let Some(v) = patch.enclosure_id {
                animal.enclosure_id = v;
            }
            animal
        }
        AnimalUpdate::Health(patch) => {
            let mut animal = existing;
            animal.health = patch.health;
            animal
        }
    };

    let updated = store.put_animal(updated)?;
    Ok(view(store, &updated))
}

pub fn delete(store: &ZooStore, actor: &Actor, id: Uuid) -> Result<(), ApiError> {
    policy::require_manager(actor, "delete animals")?;
    store.delete_animal(id)?;
    Ok(())
}

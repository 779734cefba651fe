use serde_json::Value;
use uuid::Uuid;

use crate::auth::{hash_password, verify_password};
use crate::error::ApiError;
use crate::middleware::Actor;
use crate::models::Employee;
use crate::policy;
use crate::serializers::{parse_payload, ChangePasswordRequest, EmployeePatch, EmployeePayload, EmployeeView};
use crate::store::ZooStore;

/// Full roster, ordered by last/first name. Manager only.
pub fn list(store: &ZooStore, actor: &Actor) -> Result<Vec<EmployeeView>, ApiError> {
    policy::require_manager(actor, "list employees")?;
    Ok(store.list_employees().iter().map(EmployeeView::from).collect())
}

/// Single profile: own record or any record for a manager.
pub fn get(store: &ZooStore, actor: &Actor, id: Uuid) -> Result<EmployeeView, ApiError> {
    policy::require_self_or_manager(actor, id)?;
    let employee = store.get_employee(id)?;
    Ok(EmployeeView::from(&employee))
}

/// Current actor's own profile.
pub fn me(store: &ZooStore, actor: &Actor) -> Result<EmployeeView, ApiError> {
    let employee = store.get_employee(actor.id)?;
    Ok(EmployeeView::from(&employee))
}

pub fn create(store: &ZooStore, actor: &Actor, payload: Value) -> Result<EmployeeView, ApiError> {
    policy::require_manager(actor, "create employees")?;
    let payload: EmployeePayload = parse_payload(payload, "employee")?;

    let password = payload
        .password
        .ok_or_else(|| ApiError::field_error("password", "a password is required on create"))?;

    let employee = Employee {
        id: Uuid::new_v4(),
        username: payload.username,
        password_hash: hash_password(&password),
        first_name: payload.first_name,
        last_name: payload.last_name,
        role: payload.role,
        is_staff: payload.is_staff,
        is_active: payload.is_active,
        enclosure_ids: payload.enclosure_ids,
    };

    let employee = store.insert_employee(employee)?;
    tracing::info!(username = %employee.username, role = %employee.role, "employee created");
    Ok(EmployeeView::from(&employee))
}

pub fn update(
    store: &ZooStore,
    actor: &Actor,
    id: Uuid,
    payload: Value,
    partial: bool,
) -> Result<EmployeeView, ApiError> {
    policy::require_manager(actor, "modify employees")?;
    let existing = store.get_employee(id)?;

    let updated = if partial {
        apply_patch(existing, parse_payload(payload, "employee")?)
    } else {
        let full: EmployeePayload = parse_payload(payload, "employee")?;
        Employee {
            id: existing.id,
            username: full.username,
            // A credential in the payload is hashed; otherwise the old hash stays
            password_hash: match full.password {
                Some(p) => hash_password(&p),
                None => existing.password_hash,
            },
            first_name: full.first_name,
            last_name: full.last_name,
            role: full.role,
            is_staff: full.is_staff,
            is_active: full.is_active,
            enclosure_ids: full.enclosure_ids,
        }
    };

    let updated = store.put_employee(updated)?;
    Ok(EmployeeView::from(&updated))
}

fn apply_patch(mut employee: Employee, patch: EmployeePatch) -> Employee {
    if let Some(v) = patch.username {
        employee.username = v;
    }
    if let Some(p) = patch.password {
        employee.password_hash = hash_password(&p);
    }
    if let Some(v) = patch.first_name {
        employee.first_name = v;
    }
    if let Some(v) = patch.last_name {
        employee.last_name = v;
    }
    if let Some(v) = patch.role {
        employee.role = v;
    }
    if let Some(v) = patch.is_staff {
        employee.is_staff = v;
    }
    if let Some(v) = patch.is_active {
        employee.is_active = v;
    }
    // Full replacement of the responsibility set, never a merge
    if let Some(v) = patch.enclosure_ids {
        employee.enclosure_ids = v;
    }
    employee
}

pub fn delete(store: &ZooStore, actor: &Actor, id: Uuid) -> Result<(), ApiError> {
    policy::require_manager(actor, "delete employees")?;
    policy::deny_self_delete(actor, id)?;
    store.delete_employee(id)?;
    tracing::info!(%id, "employee deleted");
    Ok(())
}

/// The old secret must verify against the stored hash before the new one is
/// accepted; a mismatch is a validation failure, not an authorization denial,
/// and leaves the stored hash untouched.
pub fn change_password(
    store: &ZooStore,
    actor: &Actor,
    id: Uuid,
    request: ChangePasswordRequest,
) -> Result<(), ApiError> {
    policy::require_self_or_manager(actor, id)?;
    let mut employee = store.get_employee(id)?;

    if !verify_password(&request.old_password, &employee.password_hash) {
        return Err(ApiError::field_error("old_password", "old password does not match"));
    }

    employee.password_hash = hash_password(&request.new_password);
    store.put_employee(employee)?;
    Ok(())
}

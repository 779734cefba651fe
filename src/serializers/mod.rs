//! Role-conditional serialization.
//!
//! Each resource gets explicit view types (what goes out, with derived
//! fields and resolved display names) and payload/patch types (what comes
//! in). Which input variant applies is selected from the actor's role and
//! the action *before* validation - see `AnimalUpdate` and `TaskUpdate`.

pub mod animal;
pub mod employee;
pub mod enclosure;
pub mod task;

pub use animal::{AnimalHealthPatch, AnimalPatch, AnimalPayload, AnimalUpdate, AnimalView};
pub use employee::{ChangePasswordRequest, EmployeePatch, EmployeePayload, EmployeeView};
pub use enclosure::{EmployeeRef, EnclosurePatch, EnclosurePayload, EnclosureView};
pub use task::{TaskCompletionPatch, TaskPatch, TaskPayload, TaskUpdate, TaskView};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::ApiError;

/// Deserialize a payload into a concrete shape; any mismatch (missing
/// required field, wrong type, unknown structure) fails the whole request.
pub(crate) fn parse_payload<T: DeserializeOwned>(payload: Value, what: &str) -> Result<T, ApiError> {
    serde_json::from_value(payload)
        .map_err(|e| ApiError::validation_error(format!("invalid {} payload: {}", what, e), None))
}

/// Distinguishes an absent patch field from an explicit null:
/// absent -> None, null -> Some(None), value -> Some(Some(v)).
pub(crate) fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(de).map(Some)
}

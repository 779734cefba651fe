//! Resource Handlers: sequence authorization, payload validation and
//! Entity Store access for each resource, with the actor passed explicitly.

pub mod animals;
pub mod dashboard;
pub mod employees;
pub mod enclosures;
pub mod tasks;

pub mod animals;
pub mod auth;
pub mod dashboard;
pub mod employees;
pub mod enclosures;
pub mod tasks;

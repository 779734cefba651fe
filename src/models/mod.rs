pub mod animal;
pub mod employee;
pub mod enclosure;
pub mod task;

pub use animal::Animal;
pub use employee::{Employee, Role};
pub use enclosure::Enclosure;
pub use task::Task;

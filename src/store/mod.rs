//! In-process Entity Store for Employee, Enclosure, Animal and Task records.
//!
//! Every mutating operation validates fully (uniqueness, foreign keys)
//! before touching any map, under a single write lock, so a rejected
//! operation leaves no partial write behind. Concurrent writers serialize
//! on the lock; the later write wins.

use std::collections::HashMap;
use std::sync::RwLock;

use thiserror::Error;
use uuid::Uuid;

use crate::models::{Animal, Employee, Enclosure, Task};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("{0}")]
    Conflict(String),
    #[error("referenced {field} does not exist")]
    InvalidReference { field: &'static str },
}

#[derive(Default)]
struct Inner {
    employees: HashMap<Uuid, Employee>,
    enclosures: HashMap<Uuid, Enclosure>,
    animals: HashMap<Uuid, Animal>,
    tasks: HashMap<Uuid, Task>,
}

impl Inner {
    fn check_username_unique(&self, username: &str, exclude: Option<Uuid>) -> Result<(), StoreError> {
        let taken = self
            .employees
            .values()
            .any(|e| e.username == username && Some(e.id) != exclude);
        if taken {
            return Err(StoreError::Conflict(format!("username '{}' is already taken", username)));
        }
        Ok(())
    }

    fn check_enclosure_set(&self, ids: &[Uuid]) -> Result<(), StoreError> {
        if ids.iter().any(|id| !self.enclosures.contains_key(id)) {
            return Err(StoreError::InvalidReference { field: "enclosure_ids" });
        }
        Ok(())
    }

    fn check_enclosure_ref(&self, id: Option<Uuid>) -> Result<(), StoreError> {
        if let Some(id) = id {
            if !self.enclosures.contains_key(&id) {
                return Err(StoreError::InvalidReference { field: "enclosure" });
            }
        }
        Ok(())
    }

    fn check_employee_ref(&self, id: Option<Uuid>) -> Result<(), StoreError> {
        if let Some(id) = id {
            if !self.employees.contains_key(&id) {
                return Err(StoreError::InvalidReference { field: "employee" });
            }
        }
        Ok(())
    }
}

/// Aggregate record counts for the dashboard.
#[derive(Debug, Clone, Copy)]
pub struct StoreCounts {
    pub employees: usize,
    pub enclosures: usize,
    pub animals: usize,
    pub tasks: usize,
    pub completed_tasks: usize,
}

#[derive(Default)]
pub struct ZooStore {
    inner: RwLock<Inner>,
}

impl ZooStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ---- Employees ----

    /// All employees, ordered by last name then first name.
    pub fn list_employees(&self) -> Vec<Employee> {
        let inner = self.inner.read().unwrap();
        let mut employees: Vec<_> = inner.employees.values().cloned().collect();
        employees.sort_by(|a, b| {
            (a.last_name.as_str(), a.first_name.as_str())
                .cmp(&(b.last_name.as_str(), b.first_name.as_str()))
        });
        employees
    }

    pub fn get_employee(&self, id: Uuid) -> Result<Employee, StoreError> {
        let inner = self.inner.read().unwrap();
        inner.employees.get(&id).cloned().ok_or(StoreError::NotFound("employee"))
    }

    pub fn find_employee_by_username(&self, username: &str) -> Option<Employee> {
        let inner = self.inner.read().unwrap();
        inner.employees.values().find(|e| e.username == username).cloned()
    }

    pub fn insert_employee(&self, employee: Employee) -> Result<Employee, StoreError> {
        let mut inner = self.inner.write().unwrap();
        inner.check_username_unique(&employee.username, None)?;
        inner.check_enclosure_set(&employee.enclosure_ids)?;
        inner.employees.insert(employee.id, employee.clone());
        Ok(employee)
    }

    pub fn put_employee(&self, employee: Employee) -> Result<Employee, StoreError> {
        let mut inner = self.inner.write().unwrap();
        if !inner.employees.contains_key(&employee.id) {
            return Err(StoreError::NotFound("employee"));
        }
        inner.check_username_unique(&employee.username, Some(employee.id))?;
        inner.check_enclosure_set(&employee.enclosure_ids)?;
        inner.employees.insert(employee.id, employee.clone());
        Ok(employee)
    }

    /// Removes the employee and nulls out task assignments pointing at them.
    /// References are cleared, never cascaded.
    pub fn delete_employee(&self, id: Uuid) -> Result<(), StoreError> {
        let mut inner = self.inner.write().unwrap();
        if inner.employees.remove(&id).is_none() {
            return Err(StoreError::NotFound("employee"));
        }
        for task in inner.tasks.values_mut() {
            if task.employee_id == Some(id) {
                task.employee_id = None;
            }
        }
        Ok(())
    }

    // ---- Enclosures ----

    /// All enclosures, ordered by name.
    pub fn list_enclosures(&self) -> Vec<Enclosure> {
        let inner = self.inner.read().unwrap();
        let mut enclosures: Vec<_> = inner.enclosures.values().cloned().collect();
        enclosures.sort_by(|a, b| a.name.cmp(&b.name));
        enclosures
    }

    pub fn get_enclosure(&self, id: Uuid) -> Result<Enclosure, StoreError> {
        let inner = self.inner.read().unwrap();
        inner.enclosures.get(&id).cloned().ok_or(StoreError::NotFound("enclosure"))
    }

    pub fn insert_enclosure(&self, enclosure: Enclosure) -> Result<Enclosure, StoreError> {
        let mut inner = self.inner.write().unwrap();
        inner.enclosures.insert(enclosure.id, enclosure.clone());
        Ok(enclosure)
    }

    pub fn put_enclosure(&self, enclosure: Enclosure) -> Result<Enclosure, StoreError> {
        let mut inner = self.inner.write().unwrap();
        if !inner.enclosures.contains_key(&enclosure.id) {
            return Err(StoreError::NotFound("enclosure"));
        }
        inner.enclosures.insert(enclosure.id, enclosure.clone());
        Ok(enclosure)
    }

    /// Removes the enclosure; animal and task references are nulled out and
    /// employee responsibility associations are dropped.
    pub fn delete_enclosure(&self, id: Uuid) -> Result<(), StoreError> {
        let mut inner = self.inner.write().unwrap();
        if inner.enclosures.remove(&id).is_none() {
            return Err(StoreError::NotFound("enclosure"));
        }
        for animal in inner.animals.values_mut() {
            if animal.enclosure_id == Some(id) {
                animal.enclosure_id = None;
            }
        }
        for task in inner.tasks.values_mut() {
            if task.enclosure_id == Some(id) {
                task.enclosure_id = None;
            }
        }
        for employee in inner.employees.values_mut() {
            employee.enclosure_ids.retain(|e| *e != id);
        }
        Ok(())
    }

    /// Live count of animals referencing the enclosure. Computed, never stored.
    pub fn animal_count(&self, enclosure_id: Uuid) -> usize {
        let inner = self.inner.read().unwrap();
        inner.animals.values().filter(|a| a.enclosure_id == Some(enclosure_id)).count()
    }

    /// Employees responsible for the enclosure, ordered by last/first name.
    pub fn responsible_employees(&self, enclosure_id: Uuid) -> Vec<Employee> {
        let inner = self.inner.read().unwrap();
        let mut employees: Vec<_> = inner
            .employees
            .values()
            .filter(|e| e.enclosure_ids.contains(&enclosure_id))
            .cloned()
            .collect();
        employees.sort_by(|a, b| {
            (a.last_name.as_str(), a.first_name.as_str())
                .cmp(&(b.last_name.as_str(), b.first_name.as_str()))
        });
        employees
    }

    // ---- Animals ----

    /// Animals, optionally filtered by enclosure, ordered by species then name.
    pub fn list_animals(&self, enclosure_id: Option<Uuid>) -> Vec<Animal> {
        let inner = self.inner.read().unwrap();
        let mut animals: Vec<_> = inner
            .animals
            .values()
            .filter(|a| enclosure_id.is_none() || a.enclosure_id == enclosure_id)
            .cloned()
            .collect();
        animals.sort_by(|a, b| {
            (a.species.as_str(), a.name.as_str()).cmp(&(b.species.as_str(), b.name.as_str()))
        });
        animals
    }

    pub fn get_animal(&self, id: Uuid) -> Result<Animal, StoreError> {
        let inner = self.inner.read().unwrap();
        inner.animals.get(&id).cloned().ok_or(StoreError::NotFound("animal"))
    }

    pub fn insert_animal(&self, animal: Animal) -> Result<Animal, StoreError> {
        let mut inner = self.inner.write().unwrap();
        inner.check_enclosure_ref(animal.enclosure_id)?;
        inner.animals.insert(animal.id, animal.clone());
        Ok(animal)
    }

    pub fn put_animal(&self, animal: Animal) -> Result<Animal, StoreError> {
        let mut inner = self.inner.write().unwrap();
        if !inner.animals.contains_key(&animal.id) {
            return Err(StoreError::NotFound("animal"));
        }
        inner.check_enclosure_ref(animal.enclosure_id)?;
        inner.animals.insert(animal.id, animal.clone());
        Ok(animal)
    }

    pub fn delete_animal(&self, id: Uuid) -> Result<(), StoreError> {
        let mut inner = self.inner.write().unwrap();
        inner.animals.remove(&id).map(|_| ()).ok_or(StoreError::NotFound("animal"))
    }

    // ---- Tasks ----

    /// All tasks, newest first.
    pub fn list_tasks(&self) -> Vec<Task> {
        let inner = self.inner.read().unwrap();
        let mut tasks: Vec<_> = inner.tasks.values().cloned().collect();
        tasks.sort_by(|a, b| b.task_timestamp.cmp(&a.task_timestamp));
        tasks
    }

    pub fn get_task(&self, id: Uuid) -> Result<Task, StoreError> {
        let inner = self.inner.read().unwrap();
        inner.tasks.get(&id).cloned().ok_or(StoreError::NotFound("task"))
    }

    pub fn insert_task(&self, task: Task) -> Result<Task, StoreError> {
        let mut inner = self.inner.write().unwrap();
        inner.check_employee_ref(task.employee_id)?;
        inner.check_enclosure_ref(task.enclosure_id)?;
        inner.tasks.insert(task.id, task.clone());
        Ok(task)
    }

    pub fn put_task(&self, task: Task) -> Result<Task, StoreError> {
        let mut inner = self.inner.write().unwrap();
        if !inner.tasks.contains_key(&task.id) {
            return Err(StoreError::NotFound("task"));
        }
        inner.check_employee_ref(task.employee_id)?;
        inner.check_enclosure_ref(task.enclosure_id)?;
        inner.tasks.insert(task.id, task.clone());
        Ok(task)
    }

    pub fn delete_task(&self, id: Uuid) -> Result<(), StoreError> {
        let mut inner = self.inner.write().unwrap();
        inner.tasks.remove(&id).map(|_| ()).ok_or(StoreError::NotFound("task"))
    }

    /// (total, completed) task counts for one employee.
    pub fn task_counts_for(&self, employee_id: Uuid) -> (usize, usize) {
        let inner = self.inner.read().unwrap();
        let mut total = 0;
        let mut completed = 0;
        for task in inner.tasks.values() {
            if task.employee_id == Some(employee_id) {
                total += 1;
                if task.is_completed {
                    completed += 1;
                }
            }
        }
        (total, completed)
    }

    pub fn counts(&self) -> StoreCounts {
        let inner = self.inner.read().unwrap();
        StoreCounts {
            employees: inner.employees.len(),
            enclosures: inner.enclosures.len(),
            animals: inner.animals.len(),
            tasks: inner.tasks.len(),
            completed_tasks: inner.tasks.values().filter(|t| t.is_completed).count(),
        }
    }

    // ---- Display-name resolution ----

    pub fn employee_name(&self, id: Uuid) -> Option<String> {
        let inner = self.inner.read().unwrap();
        inner.employees.get(&id).map(|e| e.full_name())
    }

    pub fn enclosure_name(&self, id: Uuid) -> Option<String> {
        let inner = self.inner.read().unwrap();
        inner.enclosures.get(&id).map(|e| e.name.clone())
    }
}

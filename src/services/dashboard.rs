use serde::Serialize;

use crate::error::ApiError;
use crate::middleware::Actor;
use crate::serializers::EmployeeView;
use crate::store::ZooStore;

#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub user: EmployeeView,
    pub statistics: Statistics,
    /// Actor-scoped task counts, present for workers only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_tasks: Option<TaskCounts>,
}

#[derive(Debug, Serialize)]
pub struct Statistics {
    pub total_employees: usize,
    pub total_enclosures: usize,
    pub total_animals: usize,
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub pending_tasks: usize,
}

#[derive(Debug, Serialize)]
pub struct TaskCounts {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

pub fn get(store: &ZooStore, actor: &Actor) -> Result<DashboardView, ApiError> {
    let employee = store.get_employee(actor.id)?;
    let counts = store.counts();

    let my_tasks = if actor.is_manager() {
        None
    } else {
        let (total, completed) = store.task_counts_for(actor.id);
        Some(TaskCounts { total, completed, pending: total - completed })
    };

    Ok(DashboardView {
        user: EmployeeView::from(&employee),
        statistics: Statistics {
            total_employees: counts.employees,
            total_enclosures: counts.enclosures,
            total_animals: counts.animals,
            total_tasks: counts.tasks,
            completed_tasks: counts.completed_tasks,
            pending_tasks: counts.tasks - counts.completed_tasks,
        },
        my_tasks,
    })
}

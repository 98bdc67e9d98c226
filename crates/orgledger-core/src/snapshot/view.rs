use serde::{Deserialize, Serialize};

use crate::model::EmployeeId;
use crate::ops::Store;

/// One employee as seen by observers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeView {
    pub id: EmployeeId,
    pub name: String,
    pub supervisor_id: Option<EmployeeId>,
    pub subordinates: Vec<EmployeeId>,
}

/// Serializable view of the whole chart, employees in id order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub root_id: EmployeeId,
    pub employees: Vec<EmployeeView>,
}

impl ChartSnapshot {
    pub fn capture(store: &Store) -> Self {
        let employees = store
            .list_employees()
            .into_iter()
            .map(|e| EmployeeView {
                id: e.id,
                name: e.name.clone(),
                supervisor_id: store.find_supervisor(e.id).ok().map(|s| s.id),
                subordinates: e.subordinates.iter().copied().collect(),
            })
            .collect();

        Self {
            root_id: store.root_id(),
            employees,
        }
    }

    pub fn employee(&self, id: EmployeeId) -> Option<&EmployeeView> {
        self.employees.iter().find(|e| e.id == id)
    }
}

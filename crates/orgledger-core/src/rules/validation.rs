use std::collections::HashSet;

use crate::errors::{OrgError, Result};
use crate::model::EmployeeId;
use crate::ops::Store;

/// Validate the whole org chart
///
/// Checks, in order:
///
/// 1. Every subordinate id refers to an employee in the store
/// 2. No employee has more than one supervisor
/// 3. The root has no supervisor and every other employee has one
/// 4. Every supervisor chain reaches the root (no cycles)
///
/// # Errors
///
/// Returns the first violation found, scanning employees in id order.
pub fn validate_tree(store: &Store) -> Result<()> {
    for employee in store.list_employees() {
        for sub_id in &employee.subordinates {
            if !store.contains(*sub_id) {
                return Err(OrgError::UnknownSubordinate {
                    supervisor_id: employee.id,
                    subordinate_id: *sub_id,
                });
            }
        }
    }

    for employee in store.list_employees() {
        let supervisors = store.supervisors_of(employee.id);
        if supervisors.len() > 1 {
            return Err(OrgError::MultipleSupervisors {
                employee_id: employee.id,
                supervisor_ids: supervisors,
            });
        }

        let is_root = employee.id == store.root_id();
        let has_supervisor = !supervisors.is_empty();
        if is_root == has_supervisor {
            return Err(OrgError::OrphanedEmployee {
                employee_id: employee.id,
            });
        }
    }

    for employee in store.list_employees() {
        if has_cycle(store, employee.id) {
            return Err(OrgError::CycleDetected {
                employee_id: employee.id,
            });
        }
    }

    Ok(())
}

/// Check whether walking supervisors upward from `id` revisits a node
/// before reaching the root
pub fn has_cycle(store: &Store, id: EmployeeId) -> bool {
    let mut visited = HashSet::new();
    let mut current = id;

    while visited.insert(current) {
        match store.find_supervisor(current) {
            Ok(supervisor) => current = supervisor.id,
            Err(_) => return false,
        }
    }

    true
}

/// Check whether `id` is in the subtree rooted at `ancestor_id` (excluding
/// `ancestor_id` itself)
pub fn is_descendant(store: &Store, ancestor_id: EmployeeId, id: EmployeeId) -> bool {
    let mut visited = HashSet::new();
    let mut current = id;

    while visited.insert(current) {
        match store.find_supervisor(current) {
            Ok(supervisor) if supervisor.id == ancestor_id => return true,
            Ok(supervisor) => current = supervisor.id,
            Err(_) => return false,
        }
    }

    false
}

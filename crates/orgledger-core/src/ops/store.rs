use std::collections::BTreeMap;

use crate::errors::{OrgError, Result};
use crate::model::{Employee, EmployeeId};

/// In-memory node store for the org chart
///
/// BTreeMap-based storage keyed by employee id, so listing order is
/// deterministic. Not thread-safe - the store is owned exclusively by one
/// `OrgChart` and mutated in place for the lifetime of the process.
/// Supervisor links are derived from subordinate sets, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Store {
    /// Map of employee ID to Employee
    pub(crate) employees: BTreeMap<EmployeeId, Employee>,
    /// The CEO; has no supervisor and is never reparented
    root_id: EmployeeId,
}

impl Store {
    /// Create a store holding only the root employee
    pub fn new(ceo: Employee) -> Self {
        let root_id = ceo.id;
        let mut employees = BTreeMap::new();
        employees.insert(root_id, ceo);
        Self { employees, root_id }
    }

    /// Create a store from a CEO and the rest of the roster
    ///
    /// Only identifier uniqueness is checked here; structural checks live in
    /// `rules::validation::validate_tree`.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateEmployee` if two employees share an id.
    pub fn from_roster(ceo: Employee, employees: impl IntoIterator<Item = Employee>) -> Result<Self> {
        let mut store = Self::new(ceo);
        for employee in employees {
            if store.contains(employee.id) {
                return Err(OrgError::DuplicateEmployee {
                    employee_id: employee.id,
                });
            }
            store.insert_employee(employee);
        }
        Ok(store)
    }

    /// Identifier of the root (CEO)
    pub fn root_id(&self) -> EmployeeId {
        self.root_id
    }

    pub fn contains(&self, id: EmployeeId) -> bool {
        self.employees.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Get an employee by ID
    ///
    /// # Errors
    ///
    /// Returns `EmployeeNotFound` if no employee has that id.
    pub fn find_employee(&self, id: EmployeeId) -> Result<&Employee> {
        self.employees
            .get(&id)
            .ok_or(OrgError::EmployeeNotFound { employee_id: id })
    }

    pub(crate) fn find_employee_mut(&mut self, id: EmployeeId) -> Result<&mut Employee> {
        self.employees
            .get_mut(&id)
            .ok_or(OrgError::EmployeeNotFound { employee_id: id })
    }

    /// Find the employee whose subordinate set contains `id`
    ///
    /// Scans every node. The root has no supervisor, so callers must treat
    /// it specially.
    ///
    /// # Errors
    ///
    /// Returns `EmployeeNotFound` if `id` is unknown, or `SupervisorNotFound`
    /// if no employee lists it as a subordinate (the root, or a detached node).
    pub fn find_supervisor(&self, id: EmployeeId) -> Result<&Employee> {
        self.find_employee(id)?;

        self.employees
            .values()
            .find(|e| e.has_subordinate(id))
            .ok_or(OrgError::SupervisorNotFound { employee_id: id })
    }

    /// All employees listing `id` as a subordinate (more than one means the
    /// single-supervisor invariant is broken)
    pub fn supervisors_of(&self, id: EmployeeId) -> Vec<EmployeeId> {
        self.employees
            .values()
            .filter(|e| e.has_subordinate(id))
            .map(|e| e.id)
            .collect()
    }

    /// Set-union `ids` into the supervisor's subordinate set
    ///
    /// # Errors
    ///
    /// Returns `EmployeeNotFound` if the supervisor doesn't exist.
    pub fn add_subordinates(&mut self, supervisor_id: EmployeeId, ids: &[EmployeeId]) -> Result<()> {
        self.find_employee_mut(supervisor_id)?.add_subordinates(ids);
        Ok(())
    }

    /// Set-difference `ids` out of the supervisor's subordinate set
    ///
    /// # Errors
    ///
    /// Returns `EmployeeNotFound` if the supervisor doesn't exist.
    pub fn remove_subordinates(&mut self, supervisor_id: EmployeeId, ids: &[EmployeeId]) -> Result<()> {
        self.find_employee_mut(supervisor_id)?.remove_subordinates(ids);
        Ok(())
    }

    /// Empty an employee's subordinate set
    ///
    /// # Errors
    ///
    /// Returns `EmployeeNotFound` if the employee doesn't exist.
    pub fn clear_subordinates(&mut self, id: EmployeeId) -> Result<()> {
        self.find_employee_mut(id)?.clear_subordinates();
        Ok(())
    }

    /// List all employees in ascending id order
    pub fn list_employees(&self) -> Vec<&Employee> {
        self.employees.values().collect()
    }

    /// Insert an employee, replacing any with the same id
    ///
    /// Used while assembling a roster and by test helpers.
    pub fn insert_employee(&mut self, employee: Employee) {
        self.employees.insert(employee.id, employee);
    }
}

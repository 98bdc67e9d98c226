use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique integer identifier of an employee
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(pub u32);

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for EmployeeId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Employee - a node in the organizational tree
///
/// Each employee has at most one supervisor (the employee whose
/// `subordinates` set contains it) and zero or more direct subordinates.
/// The supervisor link is not stored on the node; it is derived by the
/// store from the subordinate sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier
    pub id: EmployeeId,

    /// Display name (opaque to the engine)
    pub name: String,

    /// Direct subordinate IDs, ordered by id
    pub subordinates: BTreeSet<EmployeeId>,
}

impl Employee {
    /// Create a new Employee with no subordinates
    pub fn new(id: EmployeeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            subordinates: BTreeSet::new(),
        }
    }

    /// Builder-style helper used when assembling rosters
    pub fn with_subordinates(mut self, ids: impl IntoIterator<Item = EmployeeId>) -> Self {
        self.subordinates.extend(ids);
        self
    }

    /// Check if this employee has no direct subordinates
    pub fn is_leaf(&self) -> bool {
        self.subordinates.is_empty()
    }

    pub fn has_subordinate(&self, id: EmployeeId) -> bool {
        self.subordinates.contains(&id)
    }

    /// Set union; ids already present are ignored
    pub fn add_subordinates<'a>(&mut self, ids: impl IntoIterator<Item = &'a EmployeeId>) {
        self.subordinates.extend(ids.into_iter().copied());
    }

    /// Set difference; ids not present are ignored
    pub fn remove_subordinates<'a>(&mut self, ids: impl IntoIterator<Item = &'a EmployeeId>) {
        for id in ids {
            self.subordinates.remove(id);
        }
    }

    pub fn clear_subordinates(&mut self) {
        self.subordinates.clear();
    }
}

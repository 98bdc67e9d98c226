//! Roster Format v0 schema
//!
//! Defines the YAML/JSON structure of an initial roster:
//!
//! ```yaml
//! schema_version: 0
//! ceo:
//!   id: 1
//!   name: Mark Zuckerberg
//!   subordinates: [2, 3]
//! employees:
//!   - id: 2
//!     name: Sarah Donald
//!   - id: 3
//!     name: Tyler Simpson
//! ```

use serde::{Deserialize, Serialize};

use crate::model::{Employee, EmployeeId};

/// Top-level roster document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterV0 {
    /// Schema version (must be 0 for this format)
    pub schema_version: u32,

    /// The root of the chart
    pub ceo: SeedEmployee,

    /// Everyone else, in any order
    #[serde(default)]
    pub employees: Vec<SeedEmployee>,
}

/// Employee definition in a roster
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedEmployee {
    pub id: EmployeeId,

    pub name: String,

    /// Direct subordinate ids; duplicates collapse
    #[serde(default)]
    pub subordinates: Vec<EmployeeId>,
}

impl From<SeedEmployee> for Employee {
    fn from(seed: SeedEmployee) -> Self {
        Employee::new(seed.id, seed.name).with_subordinates(seed.subordinates)
    }
}

impl From<&Employee> for SeedEmployee {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name.clone(),
            subordinates: employee.subordinates.iter().copied().collect(),
        }
    }
}

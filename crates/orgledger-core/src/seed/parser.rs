//! Roster parser with validation
//!
//! Parses YAML or JSON rosters, checks the schema version and builds a
//! validated `Store`.

use std::fs;
use std::path::Path;

use crate::errors::{OrgError, Result};
use crate::model::Employee;
use crate::ops::Store;
use crate::rules::validation::validate_tree;
use crate::seed::format_v0::{RosterV0, SeedEmployee};

/// Parse a roster file; `.json` files are read as JSON, anything else as YAML
///
/// # Errors
///
/// Returns `Io` if the file can't be read, or any error of `parse_roster_str`.
pub fn parse_roster_file(path: &Path) -> Result<RosterV0> {
    let content = fs::read_to_string(path).map_err(|e| OrgError::Io {
        message: format!("Failed to read roster file {}: {}", path.display(), e),
    })?;

    let is_json = path
        .extension()
        .map(|ext| ext == "json")
        .unwrap_or(false);

    if is_json {
        parse_roster_json(&content)
    } else {
        parse_roster_str(&content)
    }
}

/// Parse a YAML roster from a string
///
/// # Errors
///
/// Returns `InvalidRoster` on malformed YAML or an unsupported schema version.
pub fn parse_roster_str(content: &str) -> Result<RosterV0> {
    let roster: RosterV0 = serde_yaml::from_str(content)?;
    check_schema_version(&roster)?;
    Ok(roster)
}

/// Parse a JSON roster from a string
///
/// # Errors
///
/// Returns `Serialization` on malformed JSON, or `InvalidRoster` on an
/// unsupported schema version.
pub fn parse_roster_json(content: &str) -> Result<RosterV0> {
    let roster: RosterV0 = serde_json::from_str(content)?;
    check_schema_version(&roster)?;
    Ok(roster)
}

fn check_schema_version(roster: &RosterV0) -> Result<()> {
    if roster.schema_version != 0 {
        return Err(OrgError::InvalidRoster {
            reason: format!(
                "Unsupported schema_version: {}. Expected 0",
                roster.schema_version
            ),
        });
    }
    Ok(())
}

/// Build a store from a parsed roster and validate the tree invariants
///
/// # Errors
///
/// Returns `DuplicateEmployee` for repeated ids, or the first violation
/// reported by `validate_tree`.
pub fn build_store(roster: RosterV0) -> Result<Store> {
    let store = Store::from_roster(
        roster.ceo.into(),
        roster.employees.into_iter().map(Employee::from),
    )?;
    validate_tree(&store)?;
    Ok(store)
}

/// Export the current chart as a roster document
///
/// # Errors
///
/// Returns `EmployeeNotFound` if the store's root id has no employee.
pub fn roster_from_store(store: &Store) -> Result<RosterV0> {
    let root_id = store.root_id();
    let ceo = SeedEmployee::from(store.find_employee(root_id)?);

    Ok(RosterV0 {
        schema_version: 0,
        ceo,
        employees: store
            .list_employees()
            .into_iter()
            .filter(|e| e.id != root_id)
            .map(SeedEmployee::from)
            .collect(),
    })
}

//! Roster loading for commands
//!
//! Without `--roster` the bundled fifteen-person sample chart is used.

use std::path::Path;

use orgledger_core::seed::{build_store, parse_roster_file, parse_roster_str, RosterV0};
use orgledger_core::{ExError, Store};

/// The sample roster shipped with the binary
pub const SAMPLE_ROSTER: &str = include_str!("../fixtures/sample_roster.yaml");

/// Parse the roster at `path`, or the bundled sample when `None`
///
/// # Errors
///
/// Returns an `ExError` tagged with `op = "load_roster"` if the file can't be
/// read or parsed.
pub fn load_roster(path: Option<&Path>) -> Result<RosterV0, ExError> {
    let parsed = match path {
        Some(path) => parse_roster_file(path),
        None => parse_roster_str(SAMPLE_ROSTER),
    };
    parsed.map_err(|e| ExError::from(e).with_op("load_roster"))
}

/// Load and validate a roster into a store
///
/// # Errors
///
/// As `load_roster`, plus any tree violation found by validation.
pub fn load_store(path: Option<&Path>) -> Result<Store, ExError> {
    let roster = load_roster(path)?;
    build_store(roster).map_err(|e| ExError::from(e).with_op("load_roster"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_roster_loads() {
        let store = load_store(None).unwrap();
        assert_eq!(store.len(), 15);
        assert_eq!(store.root_id().0, 1);
    }
}

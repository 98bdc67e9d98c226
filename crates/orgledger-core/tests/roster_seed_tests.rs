//! Roster files on disk through to a working chart

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use std::fs;

use common::{id, sample_store};
use orgledger_core::seed::{parse_roster_file, roster_from_store};
use orgledger_core::{ExErrorKind, OrgChart, OrgError};
use tempfile::TempDir;

const YAML_ROSTER: &str = r#"
schema_version: 0
ceo:
  id: 1
  name: Ada
  subordinates: [2, 3]
employees:
  - id: 2
    name: Brian
    subordinates: [4]
  - id: 3
    name: Chloe
  - id: 4
    name: Dmitri
"#;

#[test]
fn test_yaml_roster_file_builds_chart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("roster.yaml");
    fs::write(&path, YAML_ROSTER).unwrap();

    let roster = parse_roster_file(&path).unwrap();
    let mut chart = OrgChart::from_roster(roster).unwrap();

    assert_eq!(chart.root_id(), id(1));
    assert_eq!(chart.employees().len(), 4);

    chart.move_employee(id(2), id(3)).unwrap();
    assert_eq!(chart.supervisor_of(id(4)).unwrap().id, id(1));
    assert_eq!(chart.supervisor_of(id(2)).unwrap().id, id(3));
}

#[test]
fn test_json_roster_file_matches_exported_store() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("roster.json");
    let store = sample_store();
    fs::write(&path, serde_json::to_string_pretty(&roster_from_store(&store).unwrap()).unwrap()).unwrap();

    let chart = OrgChart::from_roster(parse_roster_file(&path).unwrap()).unwrap();

    assert_eq!(chart.store(), &store);
}

#[test]
fn test_roster_with_two_supervisors_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.yaml");
    fs::write(
        &path,
        r#"
schema_version: 0
ceo:
  id: 1
  name: Ada
  subordinates: [2, 3]
employees:
  - id: 2
    name: Brian
    subordinates: [3]
  - id: 3
    name: Chloe
"#,
    )
    .unwrap();

    let result = OrgChart::from_roster(parse_roster_file(&path).unwrap());

    match result {
        Err(err @ OrgError::MultipleSupervisors { .. }) => {
            assert_eq!(err.kind(), ExErrorKind::MultipleSupervisors);
        }
        other => panic!("expected MultipleSupervisors, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_missing_roster_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = parse_roster_file(&dir.path().join("absent.yaml")).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::Io);
}

#[test]
fn test_unsupported_schema_version_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("v9.yaml");
    fs::write(&path, YAML_ROSTER.replace("schema_version: 0", "schema_version: 9")).unwrap();

    let err = parse_roster_file(&path).unwrap_err();
    assert!(matches!(err, OrgError::InvalidRoster { .. }));
}

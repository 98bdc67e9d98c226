//! Move precondition tests
//!
//! `move_employee` does not check whether the new supervisor is a
//! descendant of the moved employee. Because the employee's subordinates are
//! promoted before it is re-attached, moving under a descendant still yields
//! a tree. Moving an employee under itself is the one case that breaks the
//! tree; these tests pin that behaviour down.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{id, sample_chart, subs};
use orgledger_core::rules::{is_descendant, validate_tree};
use orgledger_core::OrgError;

#[test]
fn test_move_under_grandchild_keeps_tree() {
    // GIVEN 13 is a grandchild of 3 (3 -> 7 -> 13)
    let mut chart = sample_chart();
    assert!(is_descendant(chart.store(), id(3), id(13)));

    // WHEN 3 moves under 13
    chart.move_employee(id(3), id(13)).unwrap();

    // THEN the chart is still a valid tree
    assert!(validate_tree(chart.store()).is_ok());
    assert_eq!(chart.supervisor_of(id(13)).unwrap().id, id(7));
    assert_eq!(chart.supervisor_of(id(7)).unwrap().id, id(1));
    assert_eq!(subs(&chart, 13), vec![3]);
}

#[test]
fn test_self_move_detaches_employee() {
    // GIVEN employee 2 with subordinate 6
    let mut chart = sample_chart();
    let before = chart.store().clone();

    // WHEN 2 is moved under itself (not rejected)
    chart.move_employee(id(2), id(2)).unwrap();

    // THEN 6 was promoted to the CEO, and 2 now reports to itself
    assert_eq!(chart.supervisor_of(id(6)).unwrap().id, id(1));
    assert_eq!(subs(&chart, 2), vec![2]);
    assert!(matches!(
        validate_tree(chart.store()),
        Err(OrgError::OrphanedEmployee { .. }) | Err(OrgError::CycleDetected { .. })
    ));

    // AND undo still restores the original tree exactly
    chart.undo().unwrap();
    assert_eq!(chart.store(), &before);
    assert!(validate_tree(chart.store()).is_ok());
}

#[test]
fn test_moving_self_looped_employee_orphans_its_subordinates() {
    // GIVEN 6 moved under itself, then 11 moved under 6
    let mut chart = sample_chart();
    let before = chart.store().clone();
    chart.move_employee(id(6), id(6)).unwrap();
    chart.move_employee(id(11), id(6)).unwrap();
    assert_eq!(subs(&chart, 6), vec![6, 11]);

    // WHEN 6 is moved back under the CEO
    chart.move_employee(id(6), id(1)).unwrap();

    // THEN 6 was its own old supervisor, so 11 ended up in no subordinate set
    assert!(subs(&chart, 6).is_empty());
    assert!(matches!(
        chart.supervisor_of(id(11)),
        Err(OrgError::SupervisorNotFound { .. })
    ));
    assert!(matches!(
        validate_tree(chart.store()),
        Err(OrgError::OrphanedEmployee { .. })
    ));

    // AND undoing all three moves still restores the original tree
    for _ in 0..3 {
        assert!(chart.undo().unwrap());
    }
    assert_eq!(chart.store(), &before);
}

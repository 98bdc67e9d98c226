//! Org controller: the public `move` / `undo` / `redo` façade
//!
//! `OrgChart` owns the node store and the history ledger exclusively. All
//! mutation goes through the three operations below, so the store can only
//! ever be in a state reachable by replaying the ledger from the roster.
//!
//! ## Atomicity Contract
//!
//! - `move_employee` validates everything before touching state; on error
//!   neither the store nor the ledger has changed
//! - `undo` / `redo` at a history boundary return `Ok(false)` and change
//!   nothing
//!
//! ## Example
//!
//! ```
//! use orgledger_core::{Employee, EmployeeId, OrgChart, Store};
//!
//! let ceo = Employee::new(EmployeeId(1), "Ceo").with_subordinates([EmployeeId(2), EmployeeId(3)]);
//! let store = Store::from_roster(
//!     ceo,
//!     [Employee::new(EmployeeId(2), "Ann"), Employee::new(EmployeeId(3), "Bob")],
//! )
//! .unwrap();
//!
//! let mut chart = OrgChart::new(store);
//! chart.move_employee(EmployeeId(3), EmployeeId(2)).unwrap();
//! assert_eq!(chart.supervisor_of(EmployeeId(3)).unwrap().id, EmployeeId(2));
//!
//! assert!(chart.undo().unwrap());
//! assert_eq!(chart.supervisor_of(EmployeeId(3)).unwrap().id, EmployeeId(1));
//! ```

use std::collections::BTreeSet;
use std::time::Instant;

use orgledger_core_types::RequestContext;
use tracing::{debug, info_span};

use crate::errors::{ExError, OrgError, Result};
use crate::history::{apply_backward, apply_forward, HistoryLedger, ReparentOp};
use crate::model::{Employee, EmployeeId};
use crate::ops::Store;
use crate::seed::{build_store, RosterV0};
use crate::snapshot::ChartSnapshot;
use crate::{log_op_end, log_op_error, log_op_noop, log_op_start};

const OP_MOVE: &str = "move_employee";
const OP_UNDO: &str = "undo";
const OP_REDO: &str = "redo";

/// The org chart engine
#[derive(Debug)]
pub struct OrgChart {
    store: Store,
    ledger: HistoryLedger,
    context: RequestContext,
}

impl OrgChart {
    /// Wrap an already-built store; history starts empty
    pub fn new(store: Store) -> Self {
        Self::with_context(store, RequestContext::new())
    }

    /// Wrap a store, tagging every log span with the given correlation ids
    pub fn with_context(store: Store, context: RequestContext) -> Self {
        Self {
            store,
            ledger: HistoryLedger::new(),
            context,
        }
    }

    /// Build from a parsed roster, validating the tree invariants
    ///
    /// # Errors
    ///
    /// Returns the first roster violation (see `seed::build_store`).
    pub fn from_roster(roster: RosterV0) -> Result<Self> {
        Ok(Self::new(build_store(roster)?))
    }

    pub fn context(&self) -> &RequestContext {
        &self.context
    }

    /// Move `employee_id` under `new_supervisor_id`
    ///
    /// The employee's own subordinates are promoted to its old supervisor,
    /// the move is applied, and one ledger entry is appended after
    /// discarding any redo branch. Moving an employee under itself is not
    /// rejected and detaches it from the chart (see `rules::validate_tree`).
    /// Such a move still undoes exactly, but later moves of the detached
    /// employee treat it as its own old supervisor: its subordinates are
    /// promoted into its own set and then cleared, leaving them orphaned
    /// until those moves are undone.
    ///
    /// # Errors
    ///
    /// * `EmployeeNotFound` - either id is not in the chart
    /// * `SupervisorNotFound` - `employee_id` is the root
    pub fn move_employee(
        &mut self,
        employee_id: EmployeeId,
        new_supervisor_id: EmployeeId,
    ) -> Result<()> {
        let span = info_span!("org_chart", request_id = %self.context.request_id);
        let _guard = span.enter();
        let started = Instant::now();
        log_op_start!(
            OP_MOVE,
            employee_id = employee_id.0,
            supervisor_id = new_supervisor_id.0
        );

        let op = match ReparentOp::capture(&self.store, employee_id, new_supervisor_id) {
            Ok(op) => op,
            Err(err) => {
                log_op_error!(
                    OP_MOVE,
                    &err,
                    duration_ms = elapsed_ms(started),
                    employee_id = employee_id.0,
                    supervisor_id = new_supervisor_id.0
                );
                return Err(err);
            }
        };

        if let Err(err) = apply_forward(&mut self.store, &op) {
            log_op_error!(
                OP_MOVE,
                &err,
                duration_ms = elapsed_ms(started),
                employee_id = employee_id.0
            );
            return Err(err);
        }

        debug!(op = OP_MOVE, change = %op.describe(), "applied");
        self.ledger.record(op);

        log_op_end!(
            OP_MOVE,
            duration_ms = elapsed_ms(started),
            employee_id = employee_id.0,
            position = self.ledger.position(),
            ledger_len = self.ledger.len()
        );
        Ok(())
    }

    /// Revert the most recent applied move
    ///
    /// Returns `Ok(false)` without changing anything when there is nothing
    /// to undo.
    ///
    /// # Errors
    ///
    /// Only if a recorded id is missing from the store, which the public
    /// API cannot cause. The history cursor only moves once the store has
    /// been reverted.
    pub fn undo(&mut self) -> Result<bool> {
        let span = info_span!("org_chart", request_id = %self.context.request_id);
        let _guard = span.enter();
        let started = Instant::now();

        let Some(op) = self.ledger.undo_target().cloned() else {
            log_op_noop!(OP_UNDO, position = self.ledger.position());
            return Ok(false);
        };

        log_op_start!(OP_UNDO, employee_id = op.subject_id().0);
        if let Err(err) = apply_backward(&mut self.store, &op) {
            log_op_error!(OP_UNDO, &err, duration_ms = elapsed_ms(started));
            return Err(err);
        }
        self.ledger.step_back();
        debug!(op = OP_UNDO, change = %op.describe(), "reverted");

        log_op_end!(
            OP_UNDO,
            duration_ms = elapsed_ms(started),
            position = self.ledger.position(),
            ledger_len = self.ledger.len()
        );
        Ok(true)
    }

    /// Re-apply the most recently undone move
    ///
    /// Returns `Ok(false)` without changing anything when there is nothing
    /// to redo.
    ///
    /// # Errors
    ///
    /// Only if a recorded id is missing from the store, which the public
    /// API cannot cause. The history cursor only moves once the store has
    /// been updated.
    pub fn redo(&mut self) -> Result<bool> {
        let span = info_span!("org_chart", request_id = %self.context.request_id);
        let _guard = span.enter();
        let started = Instant::now();

        let Some(op) = self.ledger.redo_target().cloned() else {
            log_op_noop!(OP_REDO, position = self.ledger.position());
            return Ok(false);
        };

        log_op_start!(OP_REDO, employee_id = op.subject_id().0);
        if let Err(err) = apply_forward(&mut self.store, &op) {
            log_op_error!(OP_REDO, &err, duration_ms = elapsed_ms(started));
            return Err(err);
        }
        self.ledger.step_forward();
        debug!(op = OP_REDO, change = %op.describe(), "reapplied");

        log_op_end!(
            OP_REDO,
            duration_ms = elapsed_ms(started),
            position = self.ledger.position(),
            ledger_len = self.ledger.len()
        );
        Ok(true)
    }

    // ===== Read interface =====

    pub fn root_id(&self) -> EmployeeId {
        self.store.root_id()
    }

    /// All employees in ascending id order
    pub fn employees(&self) -> Vec<&Employee> {
        self.store.list_employees()
    }

    /// # Errors
    ///
    /// Returns `EmployeeNotFound` if the id is unknown.
    pub fn employee(&self, id: EmployeeId) -> Result<&Employee> {
        self.store.find_employee(id)
    }

    /// Current direct subordinates of an employee
    ///
    /// # Errors
    ///
    /// Returns `EmployeeNotFound` if the id is unknown.
    pub fn subordinates_of(&self, id: EmployeeId) -> Result<&BTreeSet<EmployeeId>> {
        Ok(&self.store.find_employee(id)?.subordinates)
    }

    /// # Errors
    ///
    /// Returns `EmployeeNotFound` for unknown ids and `SupervisorNotFound`
    /// for the root.
    pub fn supervisor_of(&self, id: EmployeeId) -> Result<&Employee> {
        self.store.find_supervisor(id)
    }

    pub fn history(&self) -> &HistoryLedger {
        &self.ledger
    }

    pub fn can_undo(&self) -> bool {
        self.ledger.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.ledger.can_redo()
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn snapshot(&self) -> ChartSnapshot {
        ChartSnapshot::capture(&self.store)
    }

    /// Convert an error into the structured form, tagged with this chart's
    /// request id
    pub fn to_ex_error(&self, err: OrgError, op: &str) -> ExError {
        ExError::from(err)
            .with_op(op)
            .with_request_id(self.context.request_id.clone())
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    started.elapsed().as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ExErrorKind;

    // 1 -> {2, 3}, 2 -> {4}
    fn chart() -> OrgChart {
        let ceo = Employee::new(EmployeeId(1), "Ceo").with_subordinates([EmployeeId(2), EmployeeId(3)]);
        let store = Store::from_roster(
            ceo,
            [
                Employee::new(EmployeeId(2), "A").with_subordinates([EmployeeId(4)]),
                Employee::new(EmployeeId(3), "B"),
                Employee::new(EmployeeId(4), "C"),
            ],
        )
        .unwrap();
        OrgChart::new(store)
    }

    #[test]
    fn test_move_failure_leaves_state_untouched() {
        let mut chart = chart();
        chart.move_employee(EmployeeId(4), EmployeeId(3)).unwrap();
        chart.undo().unwrap();
        let before = chart.store().clone();

        let result = chart.move_employee(EmployeeId(2), EmployeeId(99));

        assert!(matches!(result, Err(OrgError::EmployeeNotFound { .. })));
        assert_eq!(chart.store(), &before);
        // The redo branch survives a failed move
        assert!(chart.can_redo());
        assert_eq!(chart.history().len(), 1);
    }

    #[test]
    fn test_move_root_is_not_found() {
        let mut chart = chart();
        let result = chart.move_employee(EmployeeId(1), EmployeeId(2));

        let err = result.unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::NotFound);
        assert!(chart.history().is_empty());
    }

    #[test]
    fn test_undo_redo_report_whether_anything_changed() {
        let mut chart = chart();
        assert!(!chart.undo().unwrap());
        assert!(!chart.redo().unwrap());

        chart.move_employee(EmployeeId(3), EmployeeId(2)).unwrap();
        assert!(!chart.redo().unwrap());
        assert!(chart.undo().unwrap());
        assert!(!chart.undo().unwrap());
        assert!(chart.redo().unwrap());
    }

    #[test]
    fn test_to_ex_error_tags_request_id() {
        let mut chart = chart();
        let err = chart.move_employee(EmployeeId(77), EmployeeId(1)).unwrap_err();
        let ex = chart.to_ex_error(err, OP_MOVE);

        assert_eq!(ex.code(), "ERR_NOT_FOUND");
        assert_eq!(ex.op(), Some(OP_MOVE));
        assert_eq!(ex.employee_id(), Some(EmployeeId(77)));
        assert_eq!(ex.request_id(), Some(&chart.context().request_id));
    }

    #[test]
    fn test_failed_undo_keeps_cursor() {
        let mut chart = chart();
        chart.move_employee(EmployeeId(3), EmployeeId(2)).unwrap();
        chart.store.employees.remove(&EmployeeId(2));

        let result = chart.undo();

        assert!(matches!(result, Err(OrgError::EmployeeNotFound { .. })));
        assert_eq!(chart.history().position(), 1);
        assert!(chart.can_undo());
        assert!(!chart.can_redo());
    }

    #[test]
    fn test_failed_redo_keeps_cursor() {
        let mut chart = chart();
        chart.move_employee(EmployeeId(3), EmployeeId(2)).unwrap();
        chart.undo().unwrap();
        chart.store.employees.remove(&EmployeeId(2));

        let result = chart.redo();

        assert!(matches!(result, Err(OrgError::EmployeeNotFound { .. })));
        assert_eq!(chart.history().position(), 0);
        assert!(chart.can_redo());
    }
}

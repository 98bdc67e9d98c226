use serde::Serialize;

use crate::errors::Result;
use crate::model::EmployeeId;
use crate::ops::Store;

/// A single reversible reparenting
///
/// Captured once, when the move is issued, and never mutated afterwards.
/// Both transitions use the captured subordinate snapshot rather than
/// re-reading the store, so an operation stays valid for redo after any
/// number of intervening undos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReparentOp {
    subject_id: EmployeeId,
    prior_subordinates: Vec<EmployeeId>,
    old_supervisor_id: EmployeeId,
    new_supervisor_id: EmployeeId,
}

impl ReparentOp {
    /// Capture a reparent of `subject_id` under `new_supervisor_id`
    ///
    /// Reads the subject's current subordinates and supervisor from the store.
    /// Nothing is mutated. Moving an employee under one of its own
    /// descendants is not checked here.
    ///
    /// # Errors
    ///
    /// * `EmployeeNotFound` - subject or new supervisor doesn't exist
    /// * `SupervisorNotFound` - subject is the root
    pub fn capture(
        store: &Store,
        subject_id: EmployeeId,
        new_supervisor_id: EmployeeId,
    ) -> Result<Self> {
        let subject = store.find_employee(subject_id)?;
        let old_supervisor = store.find_supervisor(subject_id)?;
        store.find_employee(new_supervisor_id)?;

        Ok(Self {
            subject_id,
            prior_subordinates: subject.subordinates.iter().copied().collect(),
            old_supervisor_id: old_supervisor.id,
            new_supervisor_id,
        })
    }

    pub fn subject_id(&self) -> EmployeeId {
        self.subject_id
    }

    /// Subordinates of the subject at capture time
    pub fn prior_subordinates(&self) -> &[EmployeeId] {
        &self.prior_subordinates
    }

    pub fn old_supervisor_id(&self) -> EmployeeId {
        self.old_supervisor_id
    }

    pub fn new_supervisor_id(&self) -> EmployeeId {
        self.new_supervisor_id
    }

    /// One-line description for logs and CLI output
    pub fn describe(&self) -> String {
        let promoted = if self.prior_subordinates.is_empty() {
            String::new()
        } else {
            let ids: Vec<String> = self
                .prior_subordinates
                .iter()
                .map(|id| id.to_string())
                .collect();
            format!(" (promoting {} to {})", ids.join(", "), self.old_supervisor_id)
        };
        format!(
            "move {} from {} to {}{}",
            self.subject_id, self.old_supervisor_id, self.new_supervisor_id, promoted
        )
    }
}

/// Forward transition (Reverted -> Applied)
///
/// 1. Promote the subject's captured subordinates to the old supervisor
/// 2. Clear the subject's subordinate set
/// 3. Detach the subject from the old supervisor
/// 4. Attach the subject to the new supervisor
///
/// # Errors
///
/// Returns `EmployeeNotFound` if an id recorded in `op` is missing from the
/// store. Ids are checked at capture time and the store never drops nodes.
pub fn apply_forward(store: &mut Store, op: &ReparentOp) -> Result<()> {
    store.add_subordinates(op.old_supervisor_id, &op.prior_subordinates)?;
    store.clear_subordinates(op.subject_id)?;
    store.remove_subordinates(op.old_supervisor_id, &[op.subject_id])?;
    store.add_subordinates(op.new_supervisor_id, &[op.subject_id])?;
    Ok(())
}

/// Backward transition (Applied -> Reverted), steps 1-4 of
/// `apply_forward` undone in reverse order
///
/// # Errors
///
/// Same as `apply_forward`.
pub fn apply_backward(store: &mut Store, op: &ReparentOp) -> Result<()> {
    store.remove_subordinates(op.new_supervisor_id, &[op.subject_id])?;
    store.add_subordinates(op.old_supervisor_id, &[op.subject_id])?;
    store.remove_subordinates(op.old_supervisor_id, &op.prior_subordinates)?;
    store.add_subordinates(op.subject_id, &op.prior_subordinates)?;
    Ok(())
}

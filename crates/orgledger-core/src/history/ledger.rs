use chrono::{DateTime, Utc};
use serde::Serialize;

use super::reparent::ReparentOp;

/// A recorded operation plus the time it was first issued
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerEntry {
    pub op: ReparentOp,
    pub recorded_at: DateTime<Utc>,
}

/// Linear undo/redo history
///
/// `position` counts the operations currently applied. `0` is the base
/// state, which is permanent and cannot be inverted; entry `i` (0-based)
/// is applied iff `i < position`. Entries at or beyond `position` form the
/// redo branch, which is discarded as soon as a new operation is recorded.
///
/// The ledger never touches the store itself. Callers read the operation
/// with `undo_target` / `redo_target`, apply it, and only then commit the
/// cursor with `step_back` / `step_forward`.
#[derive(Debug, Clone, Default)]
pub struct HistoryLedger {
    entries: Vec<LedgerEntry>,
    position: usize,
}

impl HistoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a freshly applied operation
    ///
    /// Drops the redo branch (if any) before appending, then advances the
    /// cursor onto the new entry.
    pub fn record(&mut self, op: ReparentOp) {
        self.entries.truncate(self.position);
        self.entries.push(LedgerEntry {
            op,
            recorded_at: Utc::now(),
        });
        self.position = self.entries.len();
    }

    /// The operation the next undo would invert, without moving the cursor
    pub fn undo_target(&self) -> Option<&ReparentOp> {
        let index = self.position.checked_sub(1)?;
        self.entries.get(index).map(|e| &e.op)
    }

    /// The operation the next redo would execute, without moving the cursor
    pub fn redo_target(&self) -> Option<&ReparentOp> {
        self.entries.get(self.position).map(|e| &e.op)
    }

    /// Move the cursor back one step, returning the operation it passed
    ///
    /// Returns `None` at the base state.
    pub fn step_back(&mut self) -> Option<&ReparentOp> {
        if self.position == 0 {
            return None;
        }
        self.position -= 1;
        self.entries.get(self.position).map(|e| &e.op)
    }

    /// Move the cursor forward one step, returning the operation it passed
    ///
    /// Returns `None` at the tip.
    pub fn step_forward(&mut self) -> Option<&ReparentOp> {
        if self.position == self.entries.len() {
            return None;
        }
        self.position += 1;
        self.entries.get(self.position - 1).map(|e| &e.op)
    }

    /// Number of operations currently applied
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of recorded operations (excluding the base state)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        self.position > 0
    }

    pub fn can_redo(&self) -> bool {
        self.position < self.entries.len()
    }

    /// Number of undone operations still reachable by redo
    pub fn redo_depth(&self) -> usize {
        self.entries.len() - self.position
    }

    /// All recorded entries, oldest first, including the redo branch
    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    /// Entries currently applied, oldest first
    pub fn applied(&self) -> &[LedgerEntry] {
        &self.entries[..self.position]
    }
}

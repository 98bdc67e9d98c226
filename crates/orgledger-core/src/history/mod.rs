//! Reversible reparent operations and the linear undo/redo ledger.
//!
//! ## Responsibilities
//!
//! - Capture the pre-state needed to invert a single reparenting
//! - Execute/invert a captured operation against an explicit `Store`
//! - Keep an ordered, singly-branching history with a cursor
//!
//! ## Non-Responsibilities
//!
//! - Orchestration and logging (handled by `chart::OrgChart`)

pub mod ledger;
pub mod reparent;

pub use ledger::{HistoryLedger, LedgerEntry};
pub use reparent::{apply_backward, apply_forward, ReparentOp};

//! orgledger Core - in-memory org chart with linear undo/redo
//!
//! This crate provides:
//! - The employee node store and its lookup operations
//! - Reversible reparent operations and the history ledger
//! - The `OrgChart` controller (`move_employee`, `undo`, `redo`)
//! - Roster seed parsing and tree validation
//! - Text rendering and deterministic snapshot digests
//! - Error and logging facilities

pub mod chart;
pub mod errors;
pub mod history;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod render;
pub mod rules;
pub mod seed;
pub mod snapshot;

// Used by the logging macros
pub use orgledger_core_types as core_types;

// Re-export commonly used types
pub use chart::OrgChart;
pub use errors::{ExError, ExErrorKind, OrgError, Result};
pub use history::{HistoryLedger, ReparentOp};
pub use model::{Employee, EmployeeId};
pub use ops::Store;

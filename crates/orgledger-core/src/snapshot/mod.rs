//! Point-in-time views of the chart.
//!
//! ## Responsibilities
//!
//! - Build a serializable snapshot of every employee and its subordinates
//! - Compute a deterministic digest of that snapshot
//!
//! Two charts with the same structure (same employees, same subordinate
//! sets) always produce the same digest, which makes undo round trips easy
//! to check from the outside.

pub mod digest;
pub mod view;

pub use digest::compute_chart_digest;
pub use view::{ChartSnapshot, EmployeeView};

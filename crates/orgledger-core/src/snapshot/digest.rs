//! Digest computation for chart snapshots.
//!
//! ## Determinism Guarantees
//!
//! - Same structure -> same digest (canonical JSON, employees in id order,
//!   subordinate sets in id order)
//! - Any change to a name or subordinate set changes the digest

use sha2::{Digest, Sha256};

use crate::errors::Result;
use crate::ops::Store;
use crate::snapshot::view::ChartSnapshot;

/// Compute the SHA256 digest of the chart's canonical snapshot
///
/// ## Returns
///
/// Hex-encoded SHA256 digest (64 characters)
///
/// ## Errors
///
/// Returns `OrgError::Serialization` if JSON serialization fails.
pub fn compute_chart_digest(store: &Store) -> Result<String> {
    let snapshot = ChartSnapshot::capture(store);
    let canonical = serde_json::to_string(&snapshot)?;
    Ok(hash_string(&canonical))
}

fn hash_string(s: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(s.as_bytes());
    hex::encode(hasher.finalize())
}

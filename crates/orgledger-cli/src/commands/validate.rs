//! Validate command
//!
//! Usage: orgledger validate --roster <PATH>

use clap::Args;
use orgledger_core::ExError;
use std::path::PathBuf;

use crate::roster::load_store;

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Roster file to check
    #[arg(long)]
    pub roster: PathBuf,
}

/// Execute validate command
///
/// # Errors
///
/// Returns the first parse or tree violation as an `ExError`.
pub fn run(args: &ValidateArgs) -> Result<String, ExError> {
    let store = load_store(Some(&args.roster))?;
    Ok(format!(
        "✓ {} is valid ({} employees, root {})\n",
        args.roster.display(),
        store.len(),
        store.root_id()
    ))
}

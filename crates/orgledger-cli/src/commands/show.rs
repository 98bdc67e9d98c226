//! Show command
//!
//! Usage: orgledger show [--roster <PATH>] [--format text|json]

use clap::Args;
use orgledger_core::render::render_chart;
use orgledger_core::snapshot::{compute_chart_digest, ChartSnapshot};
use orgledger_core::{ExError, OrgError};
use std::path::PathBuf;

use crate::options::OutputFormat;
use crate::roster::load_store;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Roster file (YAML, or JSON by extension); defaults to the bundled sample
    #[arg(long)]
    pub roster: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Execute show command, returning what should be printed
///
/// # Errors
///
/// Returns an `ExError` if the roster can't be loaded or validated.
pub fn run(args: &ShowArgs) -> Result<String, ExError> {
    let store = load_store(args.roster.as_deref())?;
    let digest = compute_chart_digest(&store).map_err(|e| ExError::from(e).with_op("show"))?;

    match args.format {
        OutputFormat::Text => Ok(format!("{}digest: {}\n", render_chart(&store), digest)),
        OutputFormat::Json => {
            let doc = serde_json::json!({
                "digest": digest,
                "chart": ChartSnapshot::capture(&store),
            });
            let mut text = serde_json::to_string_pretty(&doc)
                .map_err(|e| ExError::from(OrgError::from(e)).with_op("show"))?;
            text.push('\n');
            Ok(text)
        }
    }
}

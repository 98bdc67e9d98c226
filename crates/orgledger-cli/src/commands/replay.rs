//! Replay command
//!
//! Usage: orgledger replay [--roster <PATH>] [--format text|json] [--request-id <ID>] <STEP>...
//!
//! Steps are `move:<employee>:<supervisor>`, `undo` or `redo`, applied in
//! order to one chart. The chart is printed before the first step and after
//! every step.

use clap::Args;
use orgledger_core::render::render_chart;
use orgledger_core::snapshot::compute_chart_digest;
use orgledger_core::{EmployeeId, ExError, ExErrorKind, OrgChart, OrgError};
use orgledger_core_types::RequestContext;
use serde_json::{json, Value};
use std::fmt;
use std::fmt::Write as _;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::debug;

use crate::options::OutputFormat;
use crate::roster::load_store;

#[derive(Debug, Args)]
pub struct ReplayArgs {
    /// Roster file (YAML, or JSON by extension); defaults to the bundled sample
    #[arg(long)]
    pub roster: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Request id for log spans and errors; generated when omitted
    #[arg(long)]
    pub request_id: Option<String>,

    /// Steps to apply: move:<employee>:<supervisor>, undo, redo
    #[arg(required = true)]
    pub steps: Vec<String>,
}

/// One replay step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Move {
        employee_id: EmployeeId,
        supervisor_id: EmployeeId,
    },
    Undo,
    Redo,
}

impl FromStr for Step {
    type Err = ExError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            ExError::new(ExErrorKind::InvalidInput)
                .with_op("parse_step")
                .with_message(format!(
                    "invalid step '{}', expected move:<employee>:<supervisor>, undo or redo",
                    s
                ))
        };

        match s {
            "undo" => return Ok(Step::Undo),
            "redo" => return Ok(Step::Redo),
            _ => {}
        }

        let mut parts = s.split(':');
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some("move"), Some(employee), Some(supervisor), None) => {
                let employee_id = employee.parse::<u32>().map_err(|_| invalid())?;
                let supervisor_id = supervisor.parse::<u32>().map_err(|_| invalid())?;
                Ok(Step::Move {
                    employee_id: EmployeeId(employee_id),
                    supervisor_id: EmployeeId(supervisor_id),
                })
            }
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Move {
                employee_id,
                supervisor_id,
            } => write!(f, "move:{}:{}", employee_id, supervisor_id),
            Step::Undo => write!(f, "undo"),
            Step::Redo => write!(f, "redo"),
        }
    }
}

/// What a step did to the chart
struct StepOutcome {
    changed: bool,
    summary: String,
}

/// Execute replay command, returning what should be printed
///
/// All steps are parsed before any is applied, so a typo late in the list
/// fails without partial output.
///
/// # Errors
///
/// `InvalidInput` for a malformed step, roster errors from loading, or the
/// first failing move tagged with the chart's request id.
pub fn run(args: &ReplayArgs) -> Result<String, ExError> {
    let steps = args
        .steps
        .iter()
        .map(|s| s.parse::<Step>())
        .collect::<Result<Vec<_>, _>>()?;

    let store = load_store(args.roster.as_deref())?;
    let mut chart = match &args.request_id {
        Some(id) => OrgChart::with_context(store, RequestContext::with_request_id(id.as_str())),
        None => OrgChart::new(store),
    };

    let mut text = String::new();
    let mut records = Vec::new();

    let initial_digest = digest(&chart)?;
    let initial_chart = chart.snapshot();
    match args.format {
        OutputFormat::Text => {
            let _ = writeln!(text, "== initial ==");
            let _ = write!(text, "{}", render_chart(chart.store()));
            let _ = writeln!(text, "digest: {}", initial_digest);
        }
        OutputFormat::Json => {}
    }

    for (index, step) in steps.iter().enumerate() {
        debug!(step = %step, index, "replaying step");
        let outcome = apply_step(&mut chart, *step)?;
        let step_digest = digest(&chart)?;

        match args.format {
            OutputFormat::Text => {
                let _ = writeln!(text, "== {} {}: {} ==", index + 1, step, outcome.summary);
                let _ = write!(text, "{}", render_chart(chart.store()));
                let _ = writeln!(text, "digest: {}", step_digest);
            }
            OutputFormat::Json => records.push(json!({
                "step": step.to_string(),
                "changed": outcome.changed,
                "summary": outcome.summary,
                "position": chart.history().position(),
                "digest": step_digest,
                "chart": chart.snapshot(),
            })),
        }
    }

    match args.format {
        OutputFormat::Text => Ok(text),
        OutputFormat::Json => {
            let doc: Value = json!({
                "request_id": chart.context().request_id.as_str(),
                "initial": {
                    "digest": initial_digest,
                    "chart": initial_chart,
                },
                "steps": records,
            });
            let mut out = serde_json::to_string_pretty(&doc)
                .map_err(|e| ExError::from(OrgError::from(e)).with_op("replay"))?;
            out.push('\n');
            Ok(out)
        }
    }
}

fn apply_step(chart: &mut OrgChart, step: Step) -> Result<StepOutcome, ExError> {
    match step {
        Step::Move {
            employee_id,
            supervisor_id,
        } => {
            chart
                .move_employee(employee_id, supervisor_id)
                .map_err(|e| chart.to_ex_error(e, "move_employee"))?;
            let summary = chart
                .history()
                .applied()
                .last()
                .map(|entry| entry.op.describe())
                .unwrap_or_default();
            Ok(StepOutcome {
                changed: true,
                summary,
            })
        }
        Step::Undo => {
            let changed = chart.undo().map_err(|e| chart.to_ex_error(e, "undo"))?;
            let summary = if changed {
                let undone = chart.history().entries().get(chart.history().position());
                format!(
                    "reverted {}",
                    undone.map(|entry| entry.op.describe()).unwrap_or_default()
                )
            } else {
                "nothing to undo".to_string()
            };
            Ok(StepOutcome { changed, summary })
        }
        Step::Redo => {
            let changed = chart.redo().map_err(|e| chart.to_ex_error(e, "redo"))?;
            let summary = if changed {
                let redone = chart.history().applied().last();
                format!(
                    "reapplied {}",
                    redone.map(|entry| entry.op.describe()).unwrap_or_default()
                )
            } else {
                "nothing to redo".to_string()
            };
            Ok(StepOutcome { changed, summary })
        }
    }
}

fn digest(chart: &OrgChart) -> Result<String, ExError> {
    compute_chart_digest(chart.store()).map_err(|e| chart.to_ex_error(e, "digest"))
}

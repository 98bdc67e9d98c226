//! Roster seeds: the initial chart supplied at construction time.

pub mod format_v0;
pub mod parser;

pub use format_v0::{RosterV0, SeedEmployee};
pub use parser::{build_store, parse_roster_file, parse_roster_json, parse_roster_str, roster_from_store};

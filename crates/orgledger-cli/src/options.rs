//! Flags shared by several subcommands

use clap::ValueEnum;
use orgledger_core::logging_facility::Profile;

/// How command results are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Indented outline plus digest
    #[default]
    Text,
    /// One JSON document on stdout
    Json,
}

/// Logging profile selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogProfile {
    Dev,
    Prod,
    Quiet,
}

impl From<LogProfile> for Profile {
    fn from(profile: LogProfile) -> Self {
        match profile {
            LogProfile::Dev => Profile::Development,
            LogProfile::Prod => Profile::Production,
            LogProfile::Quiet => Profile::Quiet,
        }
    }
}

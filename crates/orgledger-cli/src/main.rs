//! orgledger CLI
//!
//! Command-line interface for the org chart ledger

use clap::{Parser, Subcommand};
use orgledger_cli::commands;
use orgledger_cli::options::LogProfile;
use orgledger_core::logging_facility;

#[derive(Debug, Parser)]
#[command(name = "orgledger")]
#[command(about = "orgledger - Org chart moves with undo/redo", long_about = None)]
struct Cli {
    /// Log output profile; RUST_LOG overrides its filter
    #[arg(long, value_enum, global = true, default_value_t = LogProfile::Quiet)]
    log_profile: LogProfile,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the chart and its digest
    Show(commands::show::ShowArgs),
    /// Apply a sequence of move/undo/redo steps, printing each state
    Replay(commands::replay::ReplayArgs),
    /// Parse and validate a roster file
    Validate(commands::validate::ValidateArgs),
}

fn main() {
    let cli = Cli::parse();
    logging_facility::init(cli.log_profile.into());

    let result = match cli.command {
        Commands::Show(args) => commands::show::run(&args),
        Commands::Replay(args) => commands::replay::run(&args),
        Commands::Validate(args) => commands::validate::run(&args),
    };

    match result {
        Ok(output) => print!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

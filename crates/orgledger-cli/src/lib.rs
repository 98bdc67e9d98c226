//! orgledger CLI
//!
//! Subcommands live in `commands`; each exposes a `run` function returning
//! the text to print so tests can drive them without spawning the binary.

pub mod commands;
pub mod options;
pub mod roster;

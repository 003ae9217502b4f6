//! # Knit CLI
//!
//! This is the binary entry point for the `knit` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Setting up logging and resolving configuration.
//! - Executing the requested operation and reporting failures.
//!
//! The orchestration itself lives in the `knit` library crate, so the binary
//! stays a thin wrapper around it.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}

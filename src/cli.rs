//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::LevelFilter;

use crate::commands;

/// Knit - Apply patches and bumps across nested git submodules
#[derive(Parser, Debug)]
#[command(name = "knit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    global: commands::GlobalArgs,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(
        long,
        global = true,
        value_name = "LEVEL",
        default_value = "info",
        value_parser = ["error", "warn", "info", "debug", "trace"]
    )]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check out a reference and sync every submodule to it
    Checkout(commands::checkout::CheckoutArgs),

    /// Apply a patch to the root repository with git am
    ApplyPatch(commands::patch::ApplyPatchArgs),

    /// Register a new submodule and commit it
    AddSubmodule(commands::submodule::AddSubmoduleArgs),

    /// Remove a submodule and commit the removal
    RemoveSubmodule(commands::submodule::RemoveSubmoduleArgs),

    /// Move a submodule to a revision and commit the new pointer
    Bump(commands::submodule::BumpArgs),

    /// Apply a patch inside a submodule and commit the result
    PatchSubmodule(commands::patch::PatchSubmoduleArgs),

    /// Create and switch to a new branch
    Branch(commands::branch::BranchArgs),

    /// List the submodules declared in .gitmodules that exist on disk
    Submodules(commands::submodule::SubmodulesArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);

        match self.command {
            Commands::Checkout(args) => commands::checkout::execute(args, &self.global),
            Commands::ApplyPatch(args) => commands::patch::execute_apply(args, &self.global),
            Commands::AddSubmodule(args) => commands::submodule::execute_add(args, &self.global),
            Commands::RemoveSubmodule(args) => {
                commands::submodule::execute_remove(args, &self.global)
            }
            Commands::Bump(args) => commands::submodule::execute_bump(args, &self.global),
            Commands::PatchSubmodule(args) => {
                commands::patch::execute_submodule(args, &self.global)
            }
            Commands::Branch(args) => commands::branch::execute(args, &self.global),
            Commands::Submodules(args) => commands::submodule::execute_list(args, &self.global),
        }
    }
}

/// Logs go to stderr. `RUST_LOG`, when set, takes precedence over the flag.
fn init_logging(level: &str) {
    let filter = level.parse::<LevelFilter>().unwrap_or(LevelFilter::Info);
    env_logger::Builder::new()
        .filter_level(filter)
        .format_timestamp(None)
        .parse_default_env()
        .try_init()
        .ok();
}

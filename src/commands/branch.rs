//! Branch command implementation

use anyhow::Result;
use clap::Args;

use super::GlobalArgs;

/// Arguments for the branch command
#[derive(Args, Debug)]
pub struct BranchArgs {
    /// Name of the branch to create. Must not exist yet.
    pub name: String,
}

/// Execute the branch command
pub fn execute(args: BranchArgs, global: &GlobalArgs) -> Result<()> {
    let repo = global.open(false)?;
    repo.checkout_branch(&args.name)?;
    println!("Switched to new branch {}", args.name);
    Ok(())
}

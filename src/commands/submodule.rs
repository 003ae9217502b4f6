//! Submodule command implementations
//!
//! `add-submodule`, `remove-submodule` and `bump` each end in one or more
//! commits made with the configured committer identity. `submodules` only
//! reads `.gitmodules` and never runs git.

use anyhow::Result;
use clap::Args;

use knit::repository::SubmoduleSpec;

use super::GlobalArgs;

/// Arguments for the add-submodule command
#[derive(Args, Debug)]
pub struct AddSubmoduleArgs {
    /// Where to place the submodule, relative to the root
    pub path: String,

    /// Remote to clone the submodule from
    pub url: String,

    /// Revision to pin the submodule at
    #[arg(value_name = "REVISION")]
    pub revision: String,

    /// Branch for the submodule to track
    #[arg(short, long)]
    pub branch: Option<String>,
}

/// Arguments for the remove-submodule command
#[derive(Args, Debug)]
pub struct RemoveSubmoduleArgs {
    /// Submodule path relative to the root
    pub path: String,
}

/// Arguments for the bump command
#[derive(Args, Debug)]
pub struct BumpArgs {
    /// Submodule path relative to the root. A nested submodule is addressed
    /// as src/<outer>/src/<inner>.
    pub path: String,

    /// Revision to move the submodule to
    #[arg(value_name = "SHA")]
    pub sha: String,
}

/// Arguments for the submodules command
#[derive(Args, Debug)]
pub struct SubmodulesArgs {
    /// Print the paths as a JSON array
    #[arg(long)]
    pub json: bool,
}

/// Execute the add-submodule command
pub fn execute_add(args: AddSubmoduleArgs, global: &GlobalArgs) -> Result<()> {
    let repo = global.open(true)?;
    let spec = SubmoduleSpec {
        path: args.path,
        url: args.url,
        revision: args.revision,
        branch: args.branch,
    };
    repo.add_submodule(&spec)?;
    println!("Added {} at {}", spec.path, spec.revision);
    Ok(())
}

/// Execute the remove-submodule command
pub fn execute_remove(args: RemoveSubmoduleArgs, global: &GlobalArgs) -> Result<()> {
    let repo = global.open(true)?;
    repo.remove_submodule(&args.path)?;
    println!("Removed {}", args.path);
    Ok(())
}

/// Execute the bump command
pub fn execute_bump(args: BumpArgs, global: &GlobalArgs) -> Result<()> {
    let repo = global.open(true)?;
    repo.bump_submodule(&args.path, &args.sha)?;
    println!("Bumped {} to {}", args.path, args.sha);
    Ok(())
}

/// Execute the submodules command
pub fn execute_list(args: SubmodulesArgs, global: &GlobalArgs) -> Result<()> {
    let repo = global.open(false)?;
    let submodules = repo.submodules()?;

    if args.json {
        let paths: Vec<String> = submodules
            .iter()
            .map(|path| path.display().to_string())
            .collect();
        println!("{}", serde_json::to_string_pretty(&paths)?);
    } else {
        for path in &submodules {
            println!("{}", path.display());
        }
    }
    Ok(())
}

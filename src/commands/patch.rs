//! Patch command implementations
//!
//! - `apply-patch` runs `git am` at the root.
//! - `patch-submodule` applies the patch inside a submodule and commits the
//!   result at every level it touched, following git's diagnostic when the
//!   change really belongs to a submodule nested further down.
//!
//! Patch paths are resolved against the current directory before git sees
//! them, since git runs inside the checkout.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::{absolute_patch, GlobalArgs};

/// Arguments for the apply-patch command
#[derive(Args, Debug)]
pub struct ApplyPatchArgs {
    /// Patch file in mailbox format
    #[arg(value_name = "PATCH")]
    pub patch: PathBuf,
}

/// Arguments for the patch-submodule command
#[derive(Args, Debug)]
pub struct PatchSubmoduleArgs {
    /// Submodule path relative to the root
    pub path: String,

    /// Patch file in mailbox format
    #[arg(value_name = "PATCH")]
    pub patch: PathBuf,
}

/// Execute the apply-patch command
pub fn execute_apply(args: ApplyPatchArgs, global: &GlobalArgs) -> Result<()> {
    let repo = global.open(false)?;
    let patch = absolute_patch(&args.patch)?;
    repo.apply_patch(&patch)?;
    println!("Applied {}", args.patch.display());
    Ok(())
}

/// Execute the patch-submodule command
pub fn execute_submodule(args: PatchSubmoduleArgs, global: &GlobalArgs) -> Result<()> {
    let repo = global.open(true)?;
    let patch = absolute_patch(&args.patch)?;
    repo.patch_submodule(&args.path, &patch)?;
    println!("Applied {} to {}", args.patch.display(), args.path);
    Ok(())
}

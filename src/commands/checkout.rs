//! Checkout command implementation
//!
//! Resets the checkout to a reference and brings every submodule, at any
//! depth, to the revision recorded there. Untracked files are removed at
//! every level.

use anyhow::Result;
use clap::Args;

use super::GlobalArgs;

/// Arguments for the checkout command
#[derive(Args, Debug)]
pub struct CheckoutArgs {
    /// Branch, tag or revision to check out
    #[arg(value_name = "REF")]
    pub reference: String,
}

/// Execute the checkout command
pub fn execute(args: CheckoutArgs, global: &GlobalArgs) -> Result<()> {
    let repo = global.open(false)?;
    repo.checkout(&args.reference)?;
    println!("Checked out {}", args.reference);
    Ok(())
}

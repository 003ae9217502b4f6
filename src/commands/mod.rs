//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the `knit`
//! command-line tool, grouped by what they operate on.
//!
//! ## Structure
//!
//! Each command module contains:
//! - An `Args` struct per subcommand, derived using `clap`.
//! - An `execute` function that takes the parsed `Args` together with the
//!   [`GlobalArgs`] and calls into the `knit` library.
//!
//! Configuration is resolved here, once per invocation: the optional
//! `.knit.yaml` file first, then environment variables and flags on top.

pub mod branch;
pub mod checkout;
pub mod patch;
pub mod submodule;

use anyhow::{Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};

use knit::command::{CommandRunner, DryRunRunner, GitRunner};
use knit::config::{self, CommitterConfig, Config, DEFAULT_CONFIG_FILE};
use knit::repository::{Committer, Repo};

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Root of the checkout to operate on (defaults to the current directory)
    #[arg(long, global = true, value_name = "PATH", env = "KNIT_REPO")]
    pub repo: Option<PathBuf>,

    /// Path to config file (defaults to .knit.yaml when present)
    #[arg(long, global = true, value_name = "PATH", env = "KNIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Name recorded as committer on every commit
    #[arg(long, global = true, value_name = "NAME", env = "KNIT_COMMITTER_NAME")]
    pub committer_name: Option<String>,

    /// Email recorded as committer on every commit
    #[arg(long, global = true, value_name = "EMAIL", env = "KNIT_COMMITTER_EMAIL")]
    pub committer_email: Option<String>,

    /// Log the git commands instead of running them
    #[arg(short = 'n', long, global = true)]
    pub dry_run: bool,
}

impl GlobalArgs {
    /// Loads the config file and applies flag and environment overrides.
    pub fn load_config(&self) -> Result<Config> {
        let file = match &self.config {
            Some(path) => config::from_file(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    config::from_file(default).with_context(|| {
                        format!("Failed to load configuration from {}", default.display())
                    })?
                } else {
                    Config::default()
                }
            }
        };
        Ok(file.merge(self.overrides()))
    }

    fn overrides(&self) -> Config {
        Config {
            repo: self.repo.clone(),
            committer: CommitterConfig {
                name: self.committer_name.clone(),
                email: self.committer_email.clone(),
            },
        }
    }

    /// Builds the `Repo` for this invocation.
    ///
    /// Operations that never commit pass `needs_identity = false` and may run
    /// without a configured committer.
    pub fn open(&self, needs_identity: bool) -> Result<Repo> {
        let config = self.load_config()?;
        let committer = match config.committer() {
            Ok(committer) => committer,
            Err(e) if needs_identity => return Err(e.into()),
            Err(_) => Committer::new("", ""),
        };

        let runner: Box<dyn CommandRunner> = if self.dry_run {
            Box::new(DryRunRunner)
        } else {
            Box::new(GitRunner)
        };

        let root = config.repo_root();
        let root = std::path::absolute(&root)
            .with_context(|| format!("Failed to resolve repository path {}", root.display()))?;

        Ok(Repo::new(runner, root, committer))
    }
}

/// Resolves a patch path against the current directory, since git runs it
/// from inside the checkout.
pub(crate) fn absolute_patch(patch: &Path) -> Result<PathBuf> {
    std::path::absolute(patch)
        .with_context(|| format!("Failed to resolve patch path {}", patch.display()))
}

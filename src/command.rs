//! # External Command Execution
//!
//! Every change knit makes to a checkout goes through the `git` executable.
//! This module describes one invocation as a [`Command`] value and hides the
//! process handling behind the [`CommandRunner`] trait, so the orchestrator
//! in [`crate::repository`] only builds command sequences and never spawns anything
//! itself.
//!
//! Two runners ship with the crate:
//!
//! - **`GitRunner`** spawns the system `git` with the command's working
//!   directory. Authentication, hooks configuration and anything else in the
//!   user's git setup apply as usual.
//! - **`DryRunRunner`** logs each command and reports success without running
//!   it. The CLI uses it for `--dry-run`.
//!
//! Tests substitute their own recording implementations.

use std::borrow::Cow;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process;

use log::{debug, info};

use crate::error::{Error, Result};

/// Name of the executable every [`Command`] is dispatched to.
pub const GIT: &str = "git";

/// A single invocation of `git`: its arguments and the directory to run in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub args: Vec<String>,
    pub dir: PathBuf,
}

impl Command {
    pub fn new<I, S>(dir: impl Into<PathBuf>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            dir: dir.into(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(GIT)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " \"{}\"", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// Merged stdout and stderr of a finished command, plus its exit code.
///
/// `code` is `None` when the process was terminated by a signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub bytes: Vec<u8>,
    pub code: Option<i32>,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }
}

/// Executes [`Command`]s against git.
///
/// Implementations must not retry. A failed step is reported once and the
/// caller decides what happens next.
pub trait CommandRunner: Send + Sync {
    /// Runs the command, discarding its output. A non-zero exit is an error.
    fn run(&self, command: &Command) -> Result<()>;

    /// Runs the command and returns its combined output.
    ///
    /// A non-zero exit is *not* an error here: it is reported through
    /// [`CommandOutput::success`] so the caller can inspect the diagnostic.
    /// Only failing to start the process is an error.
    fn combined_output(&self, command: &Command) -> Result<CommandOutput>;
}

/// The default [`CommandRunner`], which invokes the system `git`.
#[derive(Debug, Default, Clone, Copy)]
pub struct GitRunner;

impl GitRunner {
    fn spawn(&self, command: &Command) -> Result<process::Output> {
        debug!("Running {} in {}", command, command.dir.display());
        process::Command::new(GIT)
            .args(&command.args)
            .current_dir(&command.dir)
            .output()
            .map_err(|e| Error::GitSpawn {
                command: command.to_string(),
                message: e.to_string(),
            })
    }
}

impl CommandRunner for GitRunner {
    fn run(&self, command: &Command) -> Result<()> {
        let output = self.spawn(command)?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::GitCommand {
                command: command.to_string(),
                dir: command.dir.display().to_string(),
                stderr: stderr.trim().to_string(),
            });
        }
        Ok(())
    }

    fn combined_output(&self, command: &Command) -> Result<CommandOutput> {
        let output = self.spawn(command)?;
        let mut bytes = output.stdout;
        bytes.extend_from_slice(&output.stderr);
        Ok(CommandOutput {
            bytes,
            code: output.status.code(),
        })
    }
}

/// A [`CommandRunner`] that only logs what would run.
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRunRunner;

impl CommandRunner for DryRunRunner {
    fn run(&self, command: &Command) -> Result<()> {
        info!("[dry-run] {} (in {})", command, command.dir.display());
        Ok(())
    }

    fn combined_output(&self, command: &Command) -> Result<CommandOutput> {
        self.run(command)?;
        Ok(CommandOutput {
            bytes: Vec::new(),
            code: Some(0),
        })
    }
}

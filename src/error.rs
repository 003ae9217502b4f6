//! # Error Handling
//!
//! This module defines the centralized error type for `knit`. It uses the
//! `thiserror` library to build a single `Error` enum covering every failure
//! the orchestrator can report, with descriptive messages.
//!
//! ## Key Components
//!
//! - **`Error`**: All failures the library can produce. External command
//!   failures are returned to the caller exactly as the runner reported them;
//!   the orchestrator never wraps or translates them.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! The variants fall into four groups:
//!
//! - External command failures (`GitCommand`, `GitSpawn`).
//! - Precondition failures detected before mutating anything (`BranchExists`).
//! - Diagnostic parse failures (`UnrecognizedSubmoduleDiagnostic`).
//! - Configuration and manifest I/O (`ConfigParse`, `Io`).

use thiserror::Error;

/// Main error type for knit operations
#[derive(Error, Debug)]
pub enum Error {
    /// A git command ran but exited unsuccessfully.
    #[error("Git command failed in {dir}: {command} - {stderr}")]
    GitCommand {
        command: String,
        dir: String,
        stderr: String,
    },

    /// The git executable could not be started at all.
    #[error("Unable to run {command}: {message}")]
    GitSpawn { command: String, message: String },

    /// A branch with the requested name is already present.
    #[error("Branch \"{name}\" already exists. Please delete it before trying again")]
    BranchExists { name: String },

    /// Staging a patched submodule failed, and git's diagnostic did not name
    /// the nested submodule that owns the change.
    #[error("Unrecognized submodule diagnostic while staging {path}: {output}")]
    UnrecognizedSubmoduleDiagnostic { path: String, output: String },

    /// The `.knit.yaml` configuration is malformed or incomplete.
    #[error("Configuration error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

//! # Knit Library
//!
//! This library applies patches and revision bumps to a git checkout that
//! contains nested submodules, keeping every recorded submodule pointer
//! consistent up to the root. It is used by the `knit` command-line tool but
//! can be embedded in any program that drives such checkouts.
//!
//! ## Quick Example
//!
//! ```no_run
//! use knit::command::GitRunner;
//! use knit::repository::{Committer, Repo};
//!
//! let repo = Repo::new(
//!     Box::new(GitRunner),
//!     "/srv/checkout",
//!     Committer::new("Knit Bot", "knit@example.com"),
//! );
//!
//! repo.checkout("main")?;
//! // Commits "Knit bump of src/codec" inside src/engine, then
//! // "Knit bump of src/engine" at the root.
//! repo.bump_submodule("src/engine/src/codec", "4f2a9c1")?;
//! # Ok::<(), knit::error::Error>(())
//! ```
//!
//! ## Core Concepts
//!
//! - **Commands (`command`)**: A git invocation is a plain value (arguments
//!   plus working directory) executed by a `CommandRunner`. The orchestrator
//!   never spawns processes itself.
//! - **Orchestration (`repository`)**: `Repo` turns each high-level operation
//!   into an ordered command sequence and stops at the first failure.
//! - **Structure discovery (`path`, `diagnostic`, `manifest`)**: nested
//!   submodule paths are decomposed by shape, git diagnostics reveal
//!   submodules a patch touched, and `.gitmodules` lists declared submodules.
//! - **Configuration (`config`)**: the optional `.knit.yaml` file.

pub mod command;
pub mod config;
pub mod diagnostic;
pub mod error;
pub mod manifest;
pub mod path;
pub mod repository;

#[cfg(test)]
mod path_proptest;

//! # Submodule-Aware Repository Orchestration
//!
//! This module provides [`Repo`], the high-level interface for changing a
//! checkout that contains nested submodules. Each public operation turns into
//! an ordered list of [`Command`]s that are handed to a [`CommandRunner`] one
//! at a time. The first failing command stops the sequence and its error is
//! returned as-is.
//!
//! ## Design
//!
//! `Repo` never spawns processes itself. It holds a boxed `CommandRunner`, so
//! the same orchestration runs against real git ([`GitRunner`]), a dry run
//! ([`DryRunRunner`]) or a recording mock in tests.
//!
//! Commits are always made with the committer identity passed as `-c`
//! overrides and with hooks bypassed, so knit never touches the user's git
//! configuration. Commit messages are fixed per operation:
//!
//! | Operation            | Message                                  |
//! |----------------------|------------------------------------------|
//! | `add_submodule`      | `Knit addition of <path>`                |
//! | `remove_submodule`   | `Knit removal of submodule '<path>'`     |
//! | `bump_submodule`     | `Knit bump of <path>`                    |
//! | `patch_submodule`    | `Knit patch of <path>`                   |
//! | (nested fallback)    | `Knit submodule patch of <path>`         |
//!
//! Nothing is rolled back on failure. Every step is safe to re-run once the
//! cause has been fixed.
//!
//! [`GitRunner`]: crate::command::GitRunner
//! [`DryRunRunner`]: crate::command::DryRunRunner

use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::command::{Command, CommandRunner};
use crate::diagnostic::parse_submodule_diagnostic;
use crate::error::{Error, Result};
use crate::manifest;
use crate::path::SubmodulePath;

/// Worker count passed to `git submodule update --jobs`.
pub const SUBMODULE_JOBS: usize = 4;

/// The identity attributed to every commit knit makes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Committer {
    pub name: String,
    pub email: String,
}

impl Committer {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    fn config_args(&self) -> [String; 4] {
        [
            "-c".to_string(),
            format!("user.name={}", self.name),
            "-c".to_string(),
            format!("user.email={}", self.email),
        ]
    }
}

/// A submodule to register with [`Repo::add_submodule`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmoduleSpec {
    /// Location of the submodule relative to the root.
    pub path: String,
    /// Remote to clone from.
    pub url: String,
    /// Revision to pin the submodule at.
    pub revision: String,
    /// Branch to track, if any.
    pub branch: Option<String>,
}

/// A checkout of a repository with submodules, and the identity used to
/// commit in it.
pub struct Repo {
    runner: Box<dyn CommandRunner>,
    root: PathBuf,
    committer: Committer,
}

impl Repo {
    pub fn new(runner: Box<dyn CommandRunner>, root: impl Into<PathBuf>, committer: Committer) -> Self {
        Self {
            runner,
            root: root.into(),
            committer,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn committer(&self) -> &Committer {
        &self.committer
    }

    /// Resets the checkout to `reference` and brings every submodule, at any
    /// depth, to the revision recorded there. Untracked and ignored files are
    /// removed at every level.
    pub fn checkout(&self, reference: &str) -> Result<()> {
        info!("Checking out {} in {}", reference, self.root.display());
        let root = self.root.as_path();
        self.run_all(&[
            Command::new(root, ["checkout", reference]),
            clean(root),
            Command::new(root, ["submodule", "init"]),
            sync_recursive(root),
            update_recursive(root),
            clean_recursive(root),
        ])
    }

    /// Applies a mailbox-format patch to the root repository with `git am`.
    pub fn apply_patch(&self, patch: &Path) -> Result<()> {
        info!("Applying {} to {}", patch.display(), self.root.display());
        self.runner.run(&Command::new(
            &self.root,
            ["am".to_string(), patch.display().to_string()],
        ))
    }

    /// Registers a new submodule, checks it out at the pinned revision and
    /// commits the addition at the root.
    ///
    /// An existing registration at the same path is overwritten.
    pub fn add_submodule(&self, spec: &SubmoduleSpec) -> Result<()> {
        info!(
            "Adding submodule {} from {} at {}",
            spec.path, spec.url, spec.revision
        );
        let root = self.root.as_path();
        let submodule = root.join(&spec.path);

        let mut add = vec!["submodule", "add", "--force"];
        if let Some(branch) = &spec.branch {
            add.extend(["-b", branch.as_str()]);
        }
        add.extend([spec.url.as_str(), spec.path.as_str()]);

        self.run_all(&[
            Command::new(root, add),
            Command::new(&submodule, ["checkout", spec.revision.as_str()]),
            sync_recursive(&submodule),
            update_recursive(&submodule),
            clean_recursive(root),
            clean(&submodule),
            stage(root, &spec.path),
            self.commit(root, &format!("Knit addition of {}", spec.path)),
        ])
    }

    /// Deinitializes and deletes the submodule at `path`, then commits the
    /// removal at the root.
    ///
    /// Deinit and removal are separate git calls. If the second one fails the
    /// checkout is left deinitialized and should be inspected before retrying.
    pub fn remove_submodule(&self, path: &str) -> Result<()> {
        info!("Removing submodule {}", path);
        let root = self.root.as_path();
        self.run_all(&[
            Command::new(root, ["submodule", "deinit", "-f", path]),
            Command::new(root, ["rm", "-f", path]),
            self.commit(root, &format!("Knit removal of submodule '{}'", path)),
        ])
    }

    /// Moves the submodule at `path` to `sha` and records the new pointer.
    ///
    /// For a nested path (`src/<outer>/src/<inner>`) the pointer is committed
    /// in the outer submodule first, then the outer submodule's new pointer is
    /// committed at the root. Flat paths produce a single root commit.
    pub fn bump_submodule(&self, path: &str, sha: &str) -> Result<()> {
        info!("Bumping {} to {}", path, sha);
        let root = self.root.as_path();
        let submodule = root.join(path);
        let location = SubmodulePath::parse(path);
        let owner = location.owner(root);
        let staged = location.staged();

        let mut commands = vec![
            Command::new(&submodule, ["fetch"]),
            Command::new(&submodule, ["checkout", sha]),
            Command::new(&submodule, ["submodule", "init"]),
            Command::new(&submodule, ["submodule", "sync"]),
            update_recursive(&submodule),
            clean_recursive(root),
            clean(&submodule),
            stage(&owner, staged),
            self.commit(&owner, &format!("Knit bump of {}", staged)),
        ];

        if let Some(outer) = location.outer() {
            commands.push(stage(root, outer));
            commands.push(self.commit(root, &format!("Knit bump of {}", outer)));
        }

        self.run_all(&commands)
    }

    /// Applies `patch` inside the submodule at `path` and commits the result.
    ///
    /// If the patch touches a submodule nested below `path`, staging from the
    /// root fails and git names the owning submodule in its diagnostic. The
    /// change is then committed in that submodule first. Either way the call
    /// ends with a root commit.
    pub fn patch_submodule(&self, path: &str, patch: &Path) -> Result<()> {
        info!("Applying {} to submodule {}", patch.display(), path);
        let root = self.root.as_path();

        self.runner.run(&Command::new(
            root.join(path),
            ["am".to_string(), patch.display().to_string()],
        ))?;

        let output = self.runner.combined_output(&stage(root, path))?;
        if !output.success() {
            let text = output.text();
            let nested = parse_submodule_diagnostic(&text).ok_or_else(|| {
                Error::UnrecognizedSubmoduleDiagnostic {
                    path: path.to_string(),
                    output: text.trim().to_string(),
                }
            })?;
            warn!(
                "Patch for {} touched nested submodule {}, committing there first",
                path, nested
            );

            let nested_dir = root.join(nested);
            self.run_all(&[
                stage(&nested_dir, "."),
                self.commit(&nested_dir, &format!("Knit submodule patch of {}", nested)),
            ])?;
        }

        self.run_all(&[
            stage(root, "."),
            self.commit(root, &format!("Knit patch of {}", path)),
        ])
    }

    /// Creates and switches to branch `name`, refusing to touch an existing
    /// branch of the same name.
    pub fn checkout_branch(&self, name: &str) -> Result<()> {
        let root = self.root.as_path();
        let exists = self
            .runner
            .run(&Command::new(
                root,
                ["rev-parse".to_string(), "--verify".to_string(), format!("refs/heads/{}", name)],
            ))
            .is_ok();
        if exists {
            return Err(Error::BranchExists {
                name: name.to_string(),
            });
        }

        info!("Creating branch {}", name);
        self.runner.run(&Command::new(root, ["checkout", "-b", name]))
    }

    /// Absolute paths of the submodules declared in the root manifest that
    /// are present on disk.
    pub fn submodules(&self) -> Result<Vec<PathBuf>> {
        manifest::discover(&self.root)
    }

    fn commit(&self, dir: &Path, message: &str) -> Command {
        let mut args = self.committer.config_args().to_vec();
        args.extend([
            "commit".to_string(),
            "-m".to_string(),
            message.to_string(),
            "--no-verify".to_string(),
        ]);
        Command::new(dir, args)
    }

    fn run_all(&self, commands: &[Command]) -> Result<()> {
        for command in commands {
            self.runner.run(command)?;
        }
        Ok(())
    }
}

fn clean(dir: &Path) -> Command {
    Command::new(dir, ["clean", "-ffd"])
}

fn clean_recursive(dir: &Path) -> Command {
    Command::new(dir, ["submodule", "foreach", "--recursive", "git clean -ffd"])
}

fn sync_recursive(dir: &Path) -> Command {
    Command::new(
        dir,
        ["submodule", "foreach", "--recursive", "git submodule sync"],
    )
}

fn update_recursive(dir: &Path) -> Command {
    Command::new(
        dir,
        [
            "submodule".to_string(),
            "update".to_string(),
            "--init".to_string(),
            "--recursive".to_string(),
            "--force".to_string(),
            format!("--jobs={}", SUBMODULE_JOBS),
        ],
    )
}

fn stage(dir: &Path, path: &str) -> Command {
    Command::new(dir, ["add", "-A", path])
}

//! Shared test utilities for integration and E2E tests.
//!
//! This module provides common fixtures and helper functions to reduce
//! duplication across test files.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_config(configs::COMMITTER);
//!     fixture.command().arg("submodules").assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::Path;
use std::process::Command;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    #[allow(unused_imports)]
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::configs;
    #[allow(unused_imports)]
    pub use super::{git, git_available};
    #[allow(unused_imports)]
    pub use super::TestFixture;
}

/// Environment variables the `knit` binary reads. They are cleared for every
/// spawned command so the developer's shell cannot leak into a test.
#[allow(dead_code)]
const KNIT_ENV: [&str; 5] = [
    "KNIT_REPO",
    "KNIT_CONFIG",
    "KNIT_COMMITTER_NAME",
    "KNIT_COMMITTER_EMAIL",
    "RUST_LOG",
];

/// Common configuration YAML snippets for testing.
#[allow(dead_code)]
pub mod configs {
    /// Complete committer identity.
    pub const COMMITTER: &str = r#"
committer:
  name: Knit Bot
  email: knit@example.com
"#;

    /// Name without email.
    pub const NAME_ONLY: &str = r#"
committer:
  name: Knit Bot
"#;

    /// Invalid YAML for error testing.
    pub const INVALID_YAML: &str = "committer: [unclosed";

    /// Well-formed YAML with a key knit does not know.
    pub const UNKNOWN_KEY: &str = "repository: /srv/checkout\n";
}

/// Whether a `git` executable can be run.
#[allow(dead_code)]
pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// Runs git in `dir` with a fixed test identity and returns trimmed stdout.
///
/// Panics with git's stderr when the command fails.
#[allow(dead_code)]
pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args([
            "-c",
            "user.name=Test",
            "-c",
            "user.email=test@example.com",
            "-c",
            "init.defaultBranch=main",
            "-c",
            "protocol.file.allow=always",
        ])
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run git");
    assert!(
        output.status.success(),
        "git {:?} failed in {}: {}",
        args,
        dir.display(),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// A test fixture that provides a temporary directory with optional config.
#[allow(dead_code)]
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

#[allow(dead_code)]
impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add a `.knit.yaml` configuration file with the given content.
    pub fn with_config(self, content: &str) -> Self {
        self.temp_dir
            .child(".knit.yaml")
            .write_str(content)
            .expect("Failed to write config file");
        self
    }

    /// Add a file with the given path and content.
    #[allow(dead_code)]
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Create an empty directory at `path`.
    #[allow(dead_code)]
    pub fn with_dir(self, path: &str) -> Self {
        self.temp_dir
            .child(path)
            .create_dir_all()
            .expect("Failed to create directory");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Get the path to the config file.
    #[allow(dead_code)]
    pub fn config_path(&self) -> std::path::PathBuf {
        self.temp_dir.path().join(".knit.yaml")
    }

    /// Create a command configured to run in this fixture's directory with
    /// a clean knit environment.
    #[allow(dead_code)]
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("knit");
        cmd.current_dir(self.path());
        for var in KNIT_ENV {
            cmd.env_remove(var);
        }
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_creates_temp_dir() {
        let fixture = TestFixture::new();
        assert!(fixture.path().exists());
    }

    #[test]
    fn test_fixture_with_config() {
        let fixture = TestFixture::new().with_config(configs::COMMITTER);
        assert!(fixture.config_path().exists());
    }

    #[test]
    fn test_fixture_with_dir() {
        let fixture = TestFixture::new().with_dir("src/engine");
        assert!(fixture.path().join("src/engine").is_dir());
    }

    #[test]
    fn test_configs_are_valid_yaml() {
        for config in [configs::COMMITTER, configs::NAME_ONLY, configs::UNKNOWN_KEY] {
            serde_yaml::from_str::<serde_yaml::Value>(config).expect("Config should be valid YAML");
        }
    }

    #[test]
    fn test_invalid_yaml_is_actually_invalid() {
        let result = serde_yaml::from_str::<serde_yaml::Value>(configs::INVALID_YAML);
        assert!(result.is_err(), "INVALID_YAML should not parse");
    }
}

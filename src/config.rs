//! # Configuration
//!
//! knit reads an optional `.knit.yaml` describing which checkout to operate
//! on and who to commit as:
//!
//! ```yaml
//! repo: path/to/checkout
//! committer:
//!   name: Knit Bot
//!   email: knit@example.com
//! ```
//!
//! Every field is optional in the file. Command-line flags and environment
//! variables are layered on top with [`Config::merge`]; the merged result
//! must name a committer before any commit-producing operation can run.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::repository::Committer;

/// File name looked up in the current directory when no config path is given.
pub const DEFAULT_CONFIG_FILE: &str = ".knit.yaml";

/// Settings for a knit invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Root of the checkout. Defaults to the current directory.
    #[serde(default)]
    pub repo: Option<PathBuf>,
    #[serde(default)]
    pub committer: CommitterConfig,
}

/// Committer identity, possibly incomplete until all sources are merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommitterConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl Config {
    /// Layers `overrides` on top of `self`; set fields in `overrides` win.
    pub fn merge(self, overrides: Config) -> Config {
        Config {
            repo: overrides.repo.or(self.repo),
            committer: CommitterConfig {
                name: overrides.committer.name.or(self.committer.name),
                email: overrides.committer.email.or(self.committer.email),
            },
        }
    }

    pub fn repo_root(&self) -> PathBuf {
        self.repo.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    /// The committer identity, or a configuration error naming what is
    /// missing.
    pub fn committer(&self) -> Result<Committer> {
        let name = self.committer.name.as_deref().filter(|n| !n.is_empty());
        let email = self.committer.email.as_deref().filter(|e| !e.is_empty());
        match (name, email) {
            (Some(name), Some(email)) => Ok(Committer::new(name, email)),
            (None, _) => Err(Error::ConfigParse {
                message: "Missing committer name".to_string(),
                hint: Some(
                    "Set committer.name in .knit.yaml, pass --committer-name or set KNIT_COMMITTER_NAME"
                        .to_string(),
                ),
            }),
            (_, None) => Err(Error::ConfigParse {
                message: "Missing committer email".to_string(),
                hint: Some(
                    "Set committer.email in .knit.yaml, pass --committer-email or set KNIT_COMMITTER_EMAIL"
                        .to_string(),
                ),
            }),
        }
    }
}

/// Parses a YAML string into a `Config`. An empty document is an empty config.
pub fn parse(yaml_content: &str) -> Result<Config> {
    if yaml_content.trim().is_empty() {
        return Ok(Config::default());
    }
    serde_yaml::from_str(yaml_content).map_err(|e| Error::ConfigParse {
        message: e.to_string(),
        hint: Some("Expected keys: repo, committer.name, committer.email".to_string()),
    })
}

pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(Error::Io)?;
    parse(&content)
}

//! Submodule path decomposition
//!
//! Submodules in a knit checkout live under `src/`. A submodule that is itself
//! nested inside another submodule is addressed as `src/<outer>/src/<inner>`,
//! and its recorded pointer has to be committed in the outer submodule before
//! the outer submodule's own pointer can be committed at the root.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

static NESTED_SUBMODULE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(src/.*)/(src/.*)$").expect("nested submodule pattern is valid")
});

/// Where a submodule sits relative to the root repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmodulePath<'a> {
    /// A submodule registered directly in the root repository.
    Flat(&'a str),
    /// A submodule registered inside the submodule at `outer`. `inner` is
    /// relative to `outer`.
    Nested { outer: &'a str, inner: &'a str },
}

impl<'a> SubmodulePath<'a> {
    /// Splits `path` into outer and inner submodule paths when it names two
    /// consecutive `src/` submodules. The outer half is matched greedily, so
    /// `src/a/src/b/src/c` nests `src/c` inside `src/a/src/b`.
    pub fn parse(path: &'a str) -> Self {
        match NESTED_SUBMODULE.captures(path) {
            Some(captures) => match (captures.get(1), captures.get(2)) {
                (Some(outer), Some(inner)) => SubmodulePath::Nested {
                    outer: outer.as_str(),
                    inner: inner.as_str(),
                },
                _ => SubmodulePath::Flat(path),
            },
            None => SubmodulePath::Flat(path),
        }
    }

    /// The repository that records this submodule's pointer.
    pub fn owner(&self, root: &Path) -> PathBuf {
        match self {
            SubmodulePath::Flat(_) => root.to_path_buf(),
            SubmodulePath::Nested { outer, .. } => root.join(outer),
        }
    }

    /// The path to stage in [`owner`](Self::owner).
    pub fn staged(&self) -> &'a str {
        match self {
            SubmodulePath::Flat(path) => *path,
            SubmodulePath::Nested { inner, .. } => *inner,
        }
    }

    pub fn outer(&self) -> Option<&'a str> {
        match self {
            SubmodulePath::Flat(_) => None,
            SubmodulePath::Nested { outer, .. } => Some(*outer),
        }
    }
}

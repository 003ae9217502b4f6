//! # Submodule Manifest
//!
//! Reads the `.gitmodules` file at the root of a checkout to find which
//! submodules are declared. Only the `path = <value>` entries matter here;
//! URLs and branches stay git's business.
//!
//! The manifest is read on every call. Nothing is cached, since the file
//! changes underneath us whenever a submodule is added or removed.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// File name of the submodule manifest, relative to a repository root.
pub const MANIFEST_FILE: &str = ".gitmodules";

const PATH_PREFIX: &str = "path = ";

/// Returns every declared submodule path in `content`, in file order.
pub fn declared_paths(content: &str) -> Vec<&str> {
    content
        .lines()
        .map(str::trim)
        .filter_map(|line| line.strip_prefix(PATH_PREFIX))
        .collect()
}

/// Lists the absolute paths of declared submodules under `root` that exist on
/// disk.
///
/// Declared but absent paths are skipped: they are submodules that have not
/// been initialized yet. A missing manifest means there are no submodules.
pub fn discover(root: &Path) -> Result<Vec<PathBuf>> {
    let bytes = match fs::read(root.join(MANIFEST_FILE)) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };
    // Non-UTF-8 bytes in urls or names must not hide the path entries.
    let content = String::from_utf8_lossy(&bytes);

    Ok(declared_paths(&content)
        .into_iter()
        .map(|path| root.join(path))
        .filter(|path| path.exists())
        .collect())
}

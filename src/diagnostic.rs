//! Parsing of git diagnostics.
//!
//! When `git add` is pointed at a path that belongs to a submodule nested one
//! level deeper than expected, git refuses with a message such as
//!
//! ```text
//! fatal: Pathspec 'src/engine/src/codec/lib.c' is in submodule 'src/engine/src/codec'
//! ```
//!
//! That message is the only place git reveals which submodule actually owns
//! the change, so it is parsed here and nowhere else.

use std::sync::LazyLock;

use regex::Regex;

static IN_SUBMODULE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^.*is in submodule '(.*)'").expect("submodule diagnostic pattern is valid")
});

/// Extracts the submodule path from an "is in submodule '<path>'" diagnostic.
///
/// Returns `None` when no line of `output` has that shape.
pub fn parse_submodule_diagnostic(output: &str) -> Option<&str> {
    IN_SUBMODULE
        .captures(output)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
        .filter(|path| !path.is_empty())
}

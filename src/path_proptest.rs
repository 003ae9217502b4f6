//! Property-based tests for submodule path handling.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::diagnostic::parse_submodule_diagnostic;
    use crate::manifest::declared_paths;
    use crate::path::SubmodulePath;
    use proptest::prelude::*;
    use std::path::Path;

    // ============================================================================
    // SubmodulePath property tests
    // ============================================================================

    proptest! {
        /// Property: paths that never mention a src/ segment are always flat
        #[test]
        fn paths_without_src_are_flat(path in "[a-z_]{1,8}(/[a-z_]{1,8}){0,4}") {
            prop_assume!(!path.contains("src/"));
            prop_assert_eq!(SubmodulePath::parse(&path), SubmodulePath::Flat(&path));
        }

        /// Property: src/<a>/src/<b> always splits into its two halves
        #[test]
        fn two_src_segments_are_nested(outer in "[a-z]{1,8}", inner in "[a-z]{1,8}") {
            let path = format!("src/{}/src/{}", outer, inner);
            let expected_outer = format!("src/{}", outer);
            let expected_inner = format!("src/{}", inner);
            prop_assert_eq!(
                SubmodulePath::parse(&path),
                SubmodulePath::Nested { outer: &expected_outer, inner: &expected_inner }
            );
        }

        /// Property: a nested decomposition loses nothing
        #[test]
        fn nested_halves_rejoin_to_input(path in "(src/[a-z]{1,4}/?){1,4}") {
            if let SubmodulePath::Nested { outer, inner } = SubmodulePath::parse(&path) {
                prop_assert_eq!(format!("{}/{}", outer, inner), path.clone());
                prop_assert!(outer.starts_with("src/"));
                prop_assert!(inner.starts_with("src/"));
            }
        }

        /// Property: the owner of a path always lives under the root
        #[test]
        fn owner_is_under_root(path in "(src/[a-z]{1,4}/){0,3}src/[a-z]{1,4}") {
            let root = Path::new("/work/root");
            prop_assert!(SubmodulePath::parse(&path).owner(root).starts_with(root));
        }
    }

    // ============================================================================
    // Diagnostic and manifest property tests
    // ============================================================================

    proptest! {
        /// Property: the submodule name is recovered from any git pathspec message
        #[test]
        fn diagnostic_recovers_submodule(
            file in "[a-z/]{1,20}",
            submodule in "[a-z][a-z/]{0,20}",
        ) {
            let output = format!("fatal: Pathspec '{}' is in submodule '{}'\n", file, submodule);
            prop_assert_eq!(parse_submodule_diagnostic(&output), Some(submodule.as_str()));
        }

        /// Property: output without the marker phrase never parses
        #[test]
        fn diagnostic_without_marker_is_none(output in "[a-zA-Z0-9 :'/\n]*") {
            prop_assume!(!output.contains("is in submodule"));
            prop_assert_eq!(parse_submodule_diagnostic(&output), None);
        }

        /// Property: every indented path line of a manifest is declared
        #[test]
        fn manifest_paths_round_trip(paths in prop::collection::vec("[a-z]{1,8}(/[a-z]{1,8}){0,2}", 0..6)) {
            let content: String = paths
                .iter()
                .map(|p| format!("[submodule \"{}\"]\n\tpath = {}\n\turl = ../{}.git\n", p, p, p))
                .collect();
            let declared: Vec<String> = declared_paths(&content).into_iter().map(String::from).collect();
            prop_assert_eq!(declared, paths);
        }
    }
}

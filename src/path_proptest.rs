//! Property-based tests for path resolution and labels.
//!
//! These tests use proptest to generate random relative paths and verify that
//! the label of a resolved path is stable and portable.

#[cfg(test)]
mod proptest_tests {
    use crate::path::{display_path, resolve};
    use proptest::prelude::*;
    use std::path::Path;

    fn segment() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9_-][a-zA-Z0-9_.-]{0,8}".prop_filter("not a dot segment", |s| {
            s != "." && s != ".."
        })
    }

    fn relative_path() -> impl Strategy<Value = String> {
        prop::collection::vec(segment(), 1..5).prop_map(|parts| parts.join("/"))
    }

    proptest! {
        /// Property: the label of a plain relative path is the path itself
        #[test]
        fn display_path_round_trips_relative_paths(file in relative_path()) {
            let root = Path::new("/workspace/root");
            let resolved = resolve(root, &file);
            prop_assert_eq!(display_path(root, &resolved), file);
        }

        /// Property: resolved paths of plain relative paths stay under the root
        #[test]
        fn resolve_stays_under_root(file in relative_path()) {
            let root = Path::new("/workspace/root");
            prop_assert!(resolve(root, &file).starts_with(root));
        }

        /// Property: `./` prefixes and `x/..` detours do not change the label
        #[test]
        fn display_path_ignores_dot_segments(file in relative_path(), detour in segment()) {
            let root = Path::new("/workspace/root");
            let noisy = format!("./{}/../{}", detour, file);
            prop_assert_eq!(
                display_path(root, &resolve(root, &noisy)),
                display_path(root, &resolve(root, &file))
            );
        }

        /// Property: labels never contain backslashes
        #[test]
        fn display_path_uses_forward_slashes(file in relative_path()) {
            let root = Path::new("/workspace/root");
            prop_assert!(!display_path(root, &resolve(root, &file)).contains('\\'));
        }

        /// Property: a path escaping the root is labelled with a leading `..`
        #[test]
        fn display_path_marks_escaping_paths(file in relative_path()) {
            let root = Path::new("/workspace/root");
            let escaping = format!("../{}", file);
            let label = display_path(root, &resolve(root, &escaping));
            prop_assert!(label.starts_with("../"), "label was {}", label);
        }
    }
}

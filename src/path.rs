//! Path manipulation utilities for file-updater

use std::path::{Component, Path, PathBuf};

/// Resolve a declared relative path against the workspace root.
///
/// `.` and `..` components are folded lexically so that the result matches
/// what the display label reports. Absolute declarations replace the root.
pub fn resolve(root: &Path, file: &str) -> PathBuf {
    normalize(&root.join(file))
}

/// The label shown for a resolved path: relative to the root, with `/`
/// separators on every platform.
///
/// Paths that escape the root keep their leading `..` segments.
pub fn display_path(root: &Path, resolved: &Path) -> String {
    let root = normalize(root);
    let resolved = normalize(resolved);

    let root_parts: Vec<Component> = root.components().collect();
    let resolved_parts: Vec<Component> = resolved.components().collect();
    let common = root_parts
        .iter()
        .zip(resolved_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut segments: Vec<String> = Vec::new();
    for _ in common..root_parts.len() {
        segments.push("..".to_string());
    }
    for part in &resolved_parts[common..] {
        segments.push(part.as_os_str().to_string_lossy().replace('\\', "/"));
    }
    segments.join("/")
}

/// Fold `.` and `..` components without touching the filesystem
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let can_pop = matches!(
                    out.components().next_back(),
                    Some(Component::Normal(_))
                );
                if can_pop {
                    out.pop();
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

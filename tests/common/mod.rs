//! Shared test utilities for integration and E2E tests.
//!
//! This module provides common fixtures, helper functions, and manifest
//! snippets to reduce duplication across test files.
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
//!     let fixture = TestFixture::workspace().with_manifest(manifests::HELLO_WORLD);
//!     // ... test code
//! }
//! ```

use assert_fs::prelude::*;
use std::path::Path;

/// Re-export commonly used test dependencies for convenience.
#[allow(unused_imports)]
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    pub use super::fixtures;
    pub use super::manifests;
    pub use super::TestFixture;
}

/// Canonical file contents used across tests.
#[allow(dead_code)]
pub mod fixtures {
    /// Text file content.
    pub const HELLO_WORLD: &str = "Hello World";

    /// A `package.json` in the layout the JSON strategy writes.
    pub const PACKAGE_JSON: &str = "{\n    \"name\": \"test\"\n}\n";
}

/// Manifest snippets for the CLI.
#[allow(dead_code)]
pub mod manifests {
    /// Keeps `helloWorld.txt` at "Hello World".
    pub const HELLO_WORLD: &str = r#"
- path: helloWorld.txt
  text: Hello World
"#;

    /// Keeps `package.json` at `{"name": "test"}`.
    pub const PACKAGE_JSON: &str = r#"
- path: package.json
  json:
    name: test
"#;

    /// Adds two files, one of them nested.
    pub const NEW_FILES: &str = r#"
- path: newFile.txt
  text: new
- path: foo/newFile2.txt
  text: also new
"#;

    /// Invalid YAML for error testing.
    pub const INVALID_YAML: &str = "- path: [unclosed\n";

    /// Empty manifest (comments only).
    pub const EMPTY: &str = "# file-updater manifest\n";
}

/// A temporary workspace directory.
///
/// # Example
///
/// ```rust,ignore
/// let fixture = TestFixture::workspace()
///     .with_manifest(manifests::HELLO_WORLD)
///     .with_file("helloWorld.txt", fixtures::HELLO_WORLD);
///
/// fixture.command().arg("--test").assert().success();
/// ```
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

#[allow(dead_code)]
impl TestFixture {
    /// Create a fixture with an empty temporary directory (not a workspace).
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Create a workspace: `package.json` and `helloWorld.txt` with their
    /// canonical content.
    pub fn workspace() -> Self {
        Self::new()
            .with_file("package.json", fixtures::PACKAGE_JSON)
            .with_file("helloWorld.txt", fixtures::HELLO_WORLD)
    }

    /// Add a `.file-updater.yaml` manifest with the given content.
    pub fn with_manifest(self, content: &str) -> Self {
        self.with_file(".file-updater.yaml", content)
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Read a workspace file, `None` if it does not exist.
    pub fn read(&self, path: &str) -> Option<String> {
        std::fs::read_to_string(self.path().join(path)).ok()
    }

    /// Create a child path in the temp directory.
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// Create a command configured to run in this fixture's directory.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("file-updater");
        cmd.current_dir(self.path())
            .env_remove("FILE_UPDATER_MANIFEST")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1");
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
    fn test_workspace_fixture_has_marker() {
        let fixture = TestFixture::workspace();
        assert_eq!(fixture.read("package.json").as_deref(), Some(fixtures::PACKAGE_JSON));
        assert_eq!(fixture.read("helloWorld.txt").as_deref(), Some(fixtures::HELLO_WORLD));
    }

    #[test]
    fn test_manifests_are_valid_yaml() {
        let manifests = [
            manifests::HELLO_WORLD,
            manifests::PACKAGE_JSON,
            manifests::NEW_FILES,
        ];

        for manifest in manifests {
            serde_yaml::from_str::<serde_yaml::Value>(manifest).expect("Manifest should be valid YAML");
        }
    }

    #[test]
    fn test_invalid_yaml_is_actually_invalid() {
        let result = serde_yaml::from_str::<serde_yaml::Value>(manifests::INVALID_YAML);
        assert!(result.is_err(), "INVALID_YAML should not parse");
    }
}

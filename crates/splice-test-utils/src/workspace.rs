//! [`TestWorkspace`] builder for file-level test scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use splice_fs::NormalizedPath;
use tempfile::TempDir;

use crate::fixtures;

/// A temporary directory holding documents and manifests under test.
///
/// # Example
///
/// ```rust,no_run
/// use splice_test_utils::TestWorkspace;
///
/// let ws = TestWorkspace::new();
/// ws.write("src/App.js", "<div>{M}</div>");
/// ws.assert_file_contains("src/App.js", "{M}");
/// ```
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorkspace {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Root as a [`NormalizedPath`], for engines that resolve job paths.
    pub fn normalized_root(&self) -> NormalizedPath {
        NormalizedPath::new(self.root())
    }

    /// Absolute path of `rel` inside the workspace.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    /// Absolute [`NormalizedPath`] of `rel` inside the workspace.
    pub fn normalized(&self, rel: &str) -> NormalizedPath {
        NormalizedPath::new(self.path(rel))
    }

    /// Write `content` to `rel`, creating parent directories.
    pub fn write(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Copy a fixture document from `test-fixtures/documents` to `rel`.
    pub fn copy_fixture(&self, fixture: &str, rel: &str) -> PathBuf {
        self.write(rel, &fixtures::document(fixture))
    }

    /// Read `rel` as text.
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    pub fn read(&self, rel: &str) -> String {
        let path = self.path(rel);
        fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", path.display()))
    }

    /// Assert that the file at `rel` contains `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_file_contains(&self, rel: &str, content: &str) {
        let file_content = self.read(rel);
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            rel,
            content,
            file_content
        );
    }

    /// Assert that the file at `rel` is byte-identical to `expected`.
    ///
    /// # Panics
    /// Panics if the contents differ.
    pub fn assert_file_eq(&self, rel: &str, expected: &str) {
        let actual = self.read(rel);
        assert!(
            actual == expected,
            "File {} changed unexpectedly.\nExpected: {}\nActual: {}",
            rel,
            expected,
            actual
        );
    }
}

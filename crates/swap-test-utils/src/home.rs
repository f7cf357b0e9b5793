//! [`TestHome`] fixture for swap scenarios.
//!
//! Mirrors the real layout: a store root and a live configuration directory
//! side by side inside one temporary home.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::tree::{read_tree, write_tree};

/// A temporary home directory with helper methods for swap tests.
///
/// # Example
///
/// ```rust,no_run
/// use swap_test_utils::TestHome;
///
/// let home = TestHome::new();
/// home.write_live(&[("init.el", ";; v1")]);
/// home.assert_live_contains("init.el", ";; v1");
/// ```
pub struct TestHome {
    temp_dir: TempDir,
}

impl Default for TestHome {
    fn default() -> Self {
        Self::new()
    }
}

impl TestHome {
    /// Create an empty temporary home. Neither root nor live exist yet.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// The temporary home directory itself.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Snapshot store root (`<home>/.reserve_emacs_configs`).
    pub fn root(&self) -> PathBuf {
        self.path().join(".reserve_emacs_configs")
    }

    /// Live configuration directory (`<home>/.emacs.d`).
    pub fn live(&self) -> PathBuf {
        self.path().join(".emacs.d")
    }

    /// Pointer file inside the root.
    pub fn pointer(&self) -> PathBuf {
        self.root().join(".swap_for_current")
    }

    /// Replace the live directory with exactly `files`.
    pub fn write_live(&self, files: &[(&str, &str)]) {
        let live = self.live();
        if live.exists() {
            fs::remove_dir_all(&live).unwrap();
        }
        write_tree(&live, files);
    }

    /// Create (or replace) a stored snapshot containing exactly `files`.
    pub fn write_snapshot(&self, name: &str, files: &[(&str, &str)]) {
        let dir = self.root().join(name);
        if dir.exists() {
            fs::remove_dir_all(&dir).unwrap();
        }
        write_tree(&dir, files);
    }

    /// Write raw pointer content, creating the root if needed.
    pub fn write_pointer(&self, content: &str) {
        fs::create_dir_all(self.root()).unwrap();
        fs::write(self.pointer(), content).unwrap();
    }

    /// Raw pointer file content.
    ///
    /// # Panics
    /// Panics if the pointer file cannot be read.
    pub fn pointer_content(&self) -> String {
        fs::read_to_string(self.pointer())
            .unwrap_or_else(|e| panic!("pointer file unreadable: {e}"))
    }

    /// Assert that the live tree and snapshot `name` hold identical files.
    ///
    /// # Panics
    /// Panics with both trees printed when they differ.
    pub fn assert_live_matches_snapshot(&self, name: &str) {
        let live = read_tree(&self.live());
        let stored = read_tree(&self.root().join(name));
        assert_eq!(live, stored, "live config does not match snapshot '{name}'");
    }

    /// Assert that `relative` inside the live directory has exactly `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or differs.
    pub fn assert_live_contains(&self, relative: &str, content: &str) {
        let path = self.live().join(relative);
        let actual = fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", path.display()));
        assert_eq!(actual, content, "unexpected content in {}", path.display());
    }

    /// Assert that `relative` inside snapshot `name` has exactly `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or differs.
    pub fn assert_snapshot_contains(&self, name: &str, relative: &str, content: &str) {
        let path = self.root().join(name).join(relative);
        let actual = fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", path.display()));
        assert_eq!(actual, content, "unexpected content in {}", path.display());
    }
}

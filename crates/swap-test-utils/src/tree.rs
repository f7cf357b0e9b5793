//! Build small configuration trees and read them back for comparison.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Write `files` (relative path, content) under `root`, creating parents.
///
/// # Panics
/// Panics if any filesystem operation fails.
pub fn write_tree(root: &Path, files: &[(&str, &str)]) {
    fs::create_dir_all(root)
        .unwrap_or_else(|e| panic!("write_tree: failed to create {}: {e}", root.display()));
    for (relative, content) in files {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap_or_else(|e| {
                panic!("write_tree: failed to create {}: {e}", parent.display())
            });
        }
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("write_tree: failed to write {}: {e}", path.display()));
    }
}

/// Read every regular file under `root` into a map keyed by the
/// forward-slash relative path.
///
/// Two trees with equal maps have the same files with the same contents.
///
/// # Panics
/// Panics if `root` cannot be walked or a file cannot be read as UTF-8.
pub fn read_tree(root: &Path) -> BTreeMap<String, String> {
    let mut files = BTreeMap::new();
    for entry in WalkDir::new(root).min_depth(1) {
        let entry =
            entry.unwrap_or_else(|e| panic!("read_tree: failed to walk {}: {e}", root.display()));
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(root)
            .expect("walkdir yields paths under its root")
            .to_string_lossy()
            .replace('\\', "/");
        let content = fs::read_to_string(entry.path()).unwrap_or_else(|e| {
            panic!("read_tree: failed to read {}: {e}", entry.path().display())
        });
        files.insert(relative, content);
    }
    files
}

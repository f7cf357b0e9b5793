//! Snapshot name validation
//!
//! A snapshot name becomes a directory directly under the store root, so it
//! must be a single plain path component that cannot collide with the
//! pointer file.

use crate::{Error, Result, StorePath};

/// Validate that `name` is safe to use as a snapshot directory name.
///
/// Rejects empty names, `.`/`..`, path separators, NUL bytes, and names
/// starting with `.`.
pub fn validate_snapshot_name(name: &str) -> Result<()> {
    let reason = if name.trim().is_empty() {
        Some("name must not be empty")
    } else if name != name.trim() {
        Some("name must not start or end with whitespace")
    } else if name == "." || name == ".." {
        Some("name must not be a relative path segment")
    } else if name.contains(['/', '\\']) {
        Some("name must not contain path separators")
    } else if name.contains('\0') {
        Some("name must not contain NUL bytes")
    } else if name.starts_with('.') {
        Some("name must not start with '.'")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(Error::InvalidName {
            name: name.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}

/// Check that `name` addresses exactly one entry directly under a root.
///
/// Looser than [`validate_snapshot_name`]: dot-prefixed entries that already
/// exist in a store can still be addressed, but nothing can escape it or
/// stand in for the pointer file.
pub fn ensure_plain_component(name: &str) -> Result<()> {
    let reason = if name.is_empty() {
        Some("name must not be empty")
    } else if name == "." || name == ".." {
        Some("name must not be a relative path segment")
    } else if name.contains(['/', '\\']) {
        Some("name must not contain path separators")
    } else if name.contains('\0') {
        Some("name must not contain NUL bytes")
    } else if name == StorePath::PointerFile.as_str() {
        Some("name is reserved for the pointer file")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(Error::InvalidName {
            name: name.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}

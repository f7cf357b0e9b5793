//! Recursive directory tree primitives
//!
//! The swap manager only ever needs two operations on whole trees: copy one
//! somewhere else, and remove one. They sit behind [`TreeOps`] so the
//! manager can be exercised against fakes that fail on demand.

use crate::{Error, NormalizedPath, Result};
use std::fs;
use std::io;
use walkdir::WalkDir;

/// Whole-tree filesystem operations.
pub trait TreeOps {
    /// Copy the directory tree at `src`, including all contents, to `dst`.
    ///
    /// `dst` is created if missing. Existing files under `dst` with the same
    /// relative path are overwritten.
    fn copy_tree(&self, src: &NormalizedPath, dst: &NormalizedPath) -> Result<()>;

    /// Remove the tree at `path` and all of its contents.
    ///
    /// A missing path is not an error.
    fn remove_tree(&self, path: &NormalizedPath) -> Result<()>;
}

/// [`TreeOps`] backed by the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeTree;

impl TreeOps for NativeTree {
    fn copy_tree(&self, src: &NormalizedPath, dst: &NormalizedPath) -> Result<()> {
        let src_native = src.to_native();
        let dst_native = dst.to_native();

        let meta = fs::metadata(&src_native).map_err(|e| Error::io(&src_native, e))?;
        if !meta.is_dir() {
            return Err(Error::io(
                &src_native,
                io::Error::other("source is not a directory"),
            ));
        }

        fs::create_dir_all(&dst_native).map_err(|e| Error::io(&dst_native, e))?;

        let mut files = 0usize;
        for entry in WalkDir::new(&src_native).follow_links(false).min_depth(1) {
            let entry = entry?;
            let relative = entry
                .path()
                .strip_prefix(&src_native)
                .map_err(|_| Error::Walk {
                    path: entry.path().to_path_buf(),
                    message: "entry escaped the source tree".into(),
                })?;
            let target = dst_native.join(relative);
            let file_type = entry.file_type();

            if file_type.is_dir() {
                fs::create_dir_all(&target).map_err(|e| Error::io(&target, e))?;
            } else if file_type.is_symlink() {
                copy_symlink(entry.path(), &target)?;
            } else {
                fs::copy(entry.path(), &target).map_err(|e| Error::io(&target, e))?;
                files += 1;
            }
        }

        tracing::debug!(src = %src, dst = %dst, files, "copied tree");
        Ok(())
    }

    fn remove_tree(&self, path: &NormalizedPath) -> Result<()> {
        let native = path.to_native();
        let meta = match fs::symlink_metadata(&native) {
            Ok(meta) => meta,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(Error::io(&native, e)),
        };

        // A symlinked tree loses the link, never the target
        if meta.is_dir() {
            fs::remove_dir_all(&native).map_err(|e| Error::io(&native, e))?;
        } else {
            fs::remove_file(&native).map_err(|e| Error::io(&native, e))?;
        }

        tracing::debug!(path = %path, "removed tree");
        Ok(())
    }
}

#[cfg(unix)]
fn copy_symlink(link: &std::path::Path, target: &std::path::Path) -> Result<()> {
    let points_to = fs::read_link(link).map_err(|e| Error::io(link, e))?;
    if fs::symlink_metadata(target).is_ok() {
        fs::remove_file(target).map_err(|e| Error::io(target, e))?;
    }
    std::os::unix::fs::symlink(&points_to, target).map_err(|e| Error::io(target, e))
}

#[cfg(not(unix))]
fn copy_symlink(link: &std::path::Path, target: &std::path::Path) -> Result<()> {
    // Without portable symlink creation, fall back to copying what it points at
    let meta = fs::metadata(link).map_err(|e| Error::io(link, e))?;
    if meta.is_dir() {
        NativeTree.copy_tree(&NormalizedPath::new(link), &NormalizedPath::new(target))
    } else {
        fs::copy(link, target)
            .map(|_| ())
            .map_err(|e| Error::io(target, e))
    }
}

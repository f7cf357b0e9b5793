//! Config swap manager
//!
//! Moves the live configuration tree in and out of the snapshot store and
//! keeps the pointer file in step. The state machine has two states,
//! `NoActive` and `Active(name)`:
//!
//! - `set(x)` from either state ends in `Active(x)`, archiving the previously
//!   active snapshot first.
//! - `archive_present` from `Active(n)` re-saves `n` and ends in `NoActive`.
//! - `archive_present(Some(new))` from `NoActive` saves `new` and stays in
//!   `NoActive`; only `set`/`enable` make a snapshot active.
//!
//! Nothing is rolled back. If a step of `set` fails after an earlier step
//! succeeded, the store is left exactly as far as it got.

use crate::{Error, Pointer, Result, SwapLayout};
use std::fs;
use swap_fs::{
    NativeTree, NormalizedPath, TreeOps, ensure_plain_component, io, validate_snapshot_name,
};
use tracing::{debug, info, warn};

/// Outcome of a successful [`SwapManager::set`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// Pointer state before the switch
    pub previous: Pointer,
    /// Snapshot that is now live
    pub current: String,
}

/// Outcome of a successful [`SwapManager::archive_present`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Archived {
    /// Snapshot name the live tree was saved under
    pub name: String,
    /// Where the snapshot now lives
    pub path: NormalizedPath,
    /// Whether an older snapshot of the same name was overwritten
    pub replaced: bool,
}

/// Owns the snapshot store for one layout.
#[derive(Debug, Clone)]
pub struct SwapManager<T: TreeOps = NativeTree> {
    layout: SwapLayout,
    tree: T,
}

impl SwapManager<NativeTree> {
    /// Manager operating on the real filesystem.
    pub fn new(layout: SwapLayout) -> Self {
        Self::with_tree(layout, NativeTree)
    }
}

impl<T: TreeOps> SwapManager<T> {
    /// Manager using a custom tree implementation.
    pub fn with_tree(layout: SwapLayout, tree: T) -> Self {
        Self { layout, tree }
    }

    pub fn layout(&self) -> &SwapLayout {
        &self.layout
    }

    pub fn tree(&self) -> &T {
        &self.tree
    }

    /// Create the root directory and an empty pointer file if missing.
    pub fn ensure_storage(&self) -> Result<()> {
        let root = self.layout.root.to_native();
        if !self.layout.root.is_dir() {
            debug!(root = %self.layout.root, "root does not exist, creating it");
        }
        fs::create_dir_all(&root).map_err(|e| swap_fs::Error::io(&root, e))?;

        if io::touch(&self.layout.pointer)? {
            debug!(pointer = %self.layout.pointer, "created empty pointer file");
        }
        Ok(())
    }

    /// Names of all stored snapshots, sorted by name.
    ///
    /// Only directories count; the pointer file and any stray files are
    /// ignored.
    pub fn list_snapshots(&self) -> Result<Vec<String>> {
        let root = self.layout.root.to_native();
        let entries = fs::read_dir(&root).map_err(|e| swap_fs::Error::io(&root, e))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| swap_fs::Error::io(&root, e))?;
            let file_type = entry
                .file_type()
                .map_err(|e| swap_fs::Error::io(entry.path(), e))?;
            if !file_type.is_dir() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => warn!(name = ?raw, "skipping snapshot with non UTF-8 name"),
            }
        }

        names.sort();
        Ok(names)
    }

    /// Read the pointer file.
    pub fn read_pointer(&self) -> Result<Pointer> {
        let content = io::read_text(&self.layout.pointer)?;
        Ok(Pointer::parse(&content))
    }

    /// Empty the pointer file.
    pub fn clear_pointer(&self) -> Result<()> {
        io::write_text(&self.layout.pointer, "")?;
        debug!("cleared pointer");
        Ok(())
    }

    /// Overwrite the pointer file with exactly `name`.
    pub fn write_pointer(&self, name: &str) -> Result<()> {
        io::write_text(&self.layout.pointer, name)?;
        debug!(name, "wrote pointer");
        Ok(())
    }

    /// Copy the live tree into snapshot `name`, replacing any older copy.
    ///
    /// The pointer and the live tree are left alone. Returns `true` when an
    /// existing snapshot was replaced.
    pub fn archive(&self, name: &str) -> Result<bool> {
        ensure_plain_component(name)?;
        let dest = self.layout.snapshot_dir(name);

        // An unusable live tree must not cost us the previous snapshot
        let live = self.layout.live.to_native();
        let meta = fs::metadata(&live).map_err(|e| swap_fs::Error::io(&live, e))?;
        if !meta.is_dir() {
            return Err(swap_fs::Error::io(
                &live,
                std::io::Error::other("live configuration is not a directory"),
            )
            .into());
        }

        let replaced = dest.exists();
        if replaced {
            debug!(name, "removing previous snapshot");
            self.tree.remove_tree(&dest)?;
        }
        self.tree.copy_tree(&self.layout.live, &dest)?;

        info!(name, replaced, "archived live config");
        Ok(replaced)
    }

    /// Make snapshot `name` the live configuration and point at it.
    ///
    /// Whatever was live before is deleted; archive it first to keep it.
    pub fn enable(&self, name: &str) -> Result<()> {
        let src = self.snapshot_source(name)?;

        self.tree.remove_tree(&self.layout.live)?;
        self.tree.copy_tree(&src, &self.layout.live)?;
        self.write_pointer(name)?;

        info!(name, "enabled snapshot");
        Ok(())
    }

    /// Switch the live configuration to snapshot `name`.
    ///
    /// The currently active snapshot, if any, is re-archived under its own
    /// name before the switch so edits made to the live tree are kept.
    pub fn set(&self, name: &str) -> Result<Transition> {
        if !self.list_snapshots()?.iter().any(|s| s == name) {
            return Err(Error::SnapshotNotFound {
                name: name.to_string(),
            });
        }

        let previous = self.read_pointer()?;
        match &previous {
            Pointer::NoActive => {
                debug!(name, "no active config, enabling directly");
            }
            Pointer::Active(current) => {
                debug!(current = %current, name, "saving active config before switch");
                self.archive(current)?;
                self.clear_pointer()?;
            }
        }
        self.enable(name)?;

        Ok(Transition {
            previous,
            current: name.to_string(),
        })
    }

    /// Save the live configuration as a snapshot and clear the pointer.
    ///
    /// An active snapshot is re-saved in place; otherwise `provided` names
    /// the new snapshot and is required.
    pub fn archive_present(&self, provided: Option<&str>) -> Result<Archived> {
        let pointer = self.read_pointer()?;

        if !self.layout.live.is_dir() {
            return Err(Error::NoLiveConfig {
                path: self.layout.live.to_native(),
            });
        }

        let name = match pointer {
            Pointer::Active(current) => current,
            Pointer::NoActive => {
                let provided = provided.map(str::trim).ok_or(Error::NameRequired)?;
                validate_snapshot_name(provided)?;
                provided.to_string()
            }
        };

        let replaced = self.archive(&name)?;
        self.clear_pointer()?;

        Ok(Archived {
            path: self.layout.snapshot_dir(&name),
            name,
            replaced,
        })
    }

    /// Snapshot directory for `name`, which must exist.
    fn snapshot_source(&self, name: &str) -> Result<NormalizedPath> {
        let not_found = || Error::SnapshotNotFound {
            name: name.to_string(),
        };
        ensure_plain_component(name).map_err(|_| not_found())?;

        let src = self.layout.snapshot_dir(name);
        if !src.is_dir() {
            return Err(not_found());
        }
        Ok(src)
    }
}

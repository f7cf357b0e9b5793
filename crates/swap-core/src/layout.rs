//! Resolved locations for one invocation
//!
//! Everything the manager touches is derived from two directories: the
//! snapshot root and the live configuration. Explicit locations win over
//! the home-relative defaults.

use crate::{Error, Result};
use std::path::{Path, PathBuf};
use swap_fs::{NormalizedPath, StorePath};

/// Snapshot root, pointer file and live configuration paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapLayout {
    /// Directory holding every snapshot plus the pointer file
    pub root: NormalizedPath,
    /// `<root>/.swap_for_current`
    pub pointer: NormalizedPath,
    /// The configuration directory the editor actually reads
    pub live: NormalizedPath,
}

impl SwapLayout {
    /// Build a layout from explicit root and live directories.
    ///
    /// No validation is performed; see [`SwapLayout::validate`].
    pub fn new(root: impl AsRef<Path>, live: impl AsRef<Path>) -> Self {
        let root = NormalizedPath::new(root);
        let pointer = root.join(StorePath::PointerFile.as_str());
        Self {
            root,
            pointer,
            live: NormalizedPath::new(live),
        }
    }

    /// Default layout under `home`: `~/.reserve_emacs_configs` and `~/.emacs.d`.
    pub fn under_home(home: impl AsRef<Path>) -> Self {
        let home = home.as_ref();
        Self::new(
            home.join(StorePath::DefaultRoot.as_str()),
            home.join(StorePath::DefaultLive.as_str()),
        )
    }

    /// Resolve the layout, filling anything not given from the home directory.
    ///
    /// The result has already passed [`SwapLayout::validate`].
    pub fn resolve(root: Option<PathBuf>, live: Option<PathBuf>) -> Result<Self> {
        let layout = match (root, live) {
            (Some(root), Some(live)) => Self::new(root, live),
            (root, live) => {
                let home = dirs::home_dir().ok_or(Error::HomeNotFound)?;
                let defaults = Self::under_home(&home);
                Self::new(
                    root.unwrap_or_else(|| defaults.root.to_native()),
                    live.unwrap_or_else(|| defaults.live.to_native()),
                )
            }
        };

        layout.validate()?;
        tracing::debug!(
            root = %layout.root,
            live = %layout.live,
            "resolved swap layout"
        );
        Ok(layout)
    }

    /// Reject layouts where root and live are the same tree or nested.
    ///
    /// Archiving such a layout would copy a tree into itself, and enabling
    /// would delete the store along with the live directory.
    pub fn validate(&self) -> Result<()> {
        let root = self.root.canonicalize();
        let live = self.live.canonicalize();

        if root.starts_with(&live) || live.starts_with(&root) {
            return Err(Error::OverlappingLayout {
                root: self.root.to_native(),
                live: self.live.to_native(),
            });
        }
        Ok(())
    }

    /// Directory of the snapshot called `name`.
    pub fn snapshot_dir(&self, name: &str) -> NormalizedPath {
        self.root.join(name)
    }
}

//! Error types for swap-core

use std::path::PathBuf;

/// Result type for swap-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in swap-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Any failure reading or writing the store, the pointer or a tree
    #[error(transparent)]
    Storage(#[from] swap_fs::Error),

    /// Requested snapshot is not among the stored snapshots
    #[error("Configuration specified was not found: {name}")]
    SnapshotNotFound { name: String },

    /// Live configuration directory is absent
    #[error("No Emacs configuration currently exists at {path}")]
    NoLiveConfig { path: PathBuf },

    /// Nothing is active, so archiving needs an explicit name
    #[error("No config is currently being used; a name is required to archive it")]
    NameRequired,

    /// Default locations cannot be derived without a home directory
    #[error("Could not determine the home directory")]
    HomeNotFound,

    /// Root and live locations contain one another
    #[error("Snapshot root {root} and live config {live} must not contain one another")]
    OverlappingLayout { root: PathBuf, live: PathBuf },
}

//! Filesystem primitives for emacs-swap
//!
//! Provides normalized paths, atomic single-file I/O, snapshot name
//! validation and the recursive tree copy/remove primitives the swap
//! manager is built on.

pub mod constants;
pub mod error;
pub mod io;
pub mod name;
pub mod path;
pub mod tree;

pub use constants::StorePath;
pub use error::{Error, Result};
pub use name::{ensure_plain_component, validate_snapshot_name};
pub use path::NormalizedPath;
pub use tree::{NativeTree, TreeOps};

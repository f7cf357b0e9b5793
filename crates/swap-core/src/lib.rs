//! Snapshot store and swap state machine for emacs-swap
//!
//! This crate owns the one piece of real logic in the tool: moving a live
//! configuration tree in and out of a store of named snapshots while a
//! pointer file records which snapshot is currently live.
//!
//! - **Layout**: the resolved root, pointer and live paths for one invocation
//! - **Pointer**: `Active(name)` or `NoActive`, persisted as a one-line file
//! - **SwapManager**: list, current, set, archive and the primitives under them
//!
//! # Architecture
//!
//! ```text
//!        swap-cli
//!           |
//!       swap-core
//!           |
//!        swap-fs
//! ```
//!
//! # Example
//!
//! ```no_run
//! use swap_core::{SwapLayout, SwapManager};
//!
//! fn example() -> swap_core::Result<()> {
//!     let layout = SwapLayout::resolve(None, None)?;
//!     let manager = SwapManager::new(layout);
//!     manager.ensure_storage()?;
//!     for name in manager.list_snapshots()? {
//!         println!("{name}");
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod layout;
pub mod manager;
pub mod pointer;

pub use error::{Error, Result};
pub use layout::SwapLayout;
pub use manager::{Archived, SwapManager, Transition};
pub use pointer::Pointer;

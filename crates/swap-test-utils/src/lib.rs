//! Shared test utilities for the emacs-swap workspace.
//!
//! This crate provides standardised fixtures so every crate builds its fake
//! home directory the same way. It is a dev-dependency only — never published.
//!
//! # Modules
//!
//! - [`home`] — [`TestHome`] temporary home with a store root and live config
//! - [`tree`] — write and read back small configuration trees

pub mod home;
pub mod tree;

pub use home::TestHome;
pub use tree::{read_tree, write_tree};

//! Command implementations for swap-cli

pub mod archive;
pub mod current;
pub mod list;
pub mod set;

pub use archive::run_archive;
pub use current::run_current;
pub use list::run_list;
pub use set::run_set;

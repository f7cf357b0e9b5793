//! Current command implementation

use colored::Colorize;
use swap_core::{Pointer, SwapManager};

use crate::error::Result;

/// Print which config is active.
pub fn run_current(manager: &SwapManager) -> Result<()> {
    match manager.read_pointer()? {
        Pointer::Active(name) => println!("Currently used config is: {}", name.cyan()),
        Pointer::NoActive => println!("No config is currently being used"),
    }
    Ok(())
}

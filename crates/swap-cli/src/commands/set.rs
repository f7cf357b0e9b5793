//! Set command implementation

use colored::Colorize;
use swap_core::SwapManager;

use crate::error::Result;

/// Switch the live config to snapshot `name`.
pub fn run_set(manager: &SwapManager, name: &str) -> Result<()> {
    let transition = manager.set(name)?;

    if let Some(previous) = transition.previous.name() {
        println!(
            "{} Saved {} before switching",
            "=>".blue().bold(),
            previous.yellow()
        );
    }
    println!(
        "{} Now using {}",
        "OK".green().bold(),
        transition.current.cyan()
    );
    Ok(())
}

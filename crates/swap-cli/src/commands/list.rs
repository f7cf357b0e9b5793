//! List command implementation

use swap_core::SwapManager;

use crate::error::Result;

/// Print each stored snapshot name on its own line.
///
/// Output stays uncoloured so it can be piped.
pub fn run_list(manager: &SwapManager) -> Result<()> {
    for name in manager.list_snapshots()? {
        println!("{name}");
    }
    Ok(())
}

//! Archive command implementation

use colored::Colorize;
use swap_core::{Error as CoreError, SwapManager};

use crate::error::Result;
use crate::interactive;

/// Save the live config and clear the pointer.
///
/// When nothing is active and no name was given, the name is asked for
/// interactively.
pub fn run_archive(manager: &SwapManager, name: Option<&str>) -> Result<()> {
    let archived = match manager.archive_present(name) {
        Err(CoreError::NameRequired) => {
            let prompted = interactive::prompt_snapshot_name()?;
            manager.archive_present(Some(&prompted))?
        }
        other => other?,
    };

    if archived.replaced {
        println!(
            "{} Replaced previous snapshot {}",
            "=>".yellow(),
            archived.name.cyan()
        );
    }
    println!(
        "{} Present configuration successfully saved as {} at {}",
        "OK".green().bold(),
        archived.name.cyan(),
        archived.path.to_string().dimmed()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use swap_core::SwapLayout;
    use swap_test_utils::TestHome;

    fn setup() -> (TestHome, SwapManager) {
        let home = TestHome::new();
        let manager = SwapManager::new(SwapLayout::new(home.root(), home.live()));
        manager.ensure_storage().unwrap();
        (home, manager)
    }

    #[test]
    fn test_archive_with_name() {
        let (home, manager) = setup();
        home.write_live(&[("init.el", ";; v1")]);

        run_archive(&manager, Some("work")).unwrap();

        home.assert_snapshot_contains("work", "init.el", ";; v1");
        assert_eq!(home.pointer_content(), "");
    }

    #[test]
    fn test_archive_active_needs_no_name() {
        let (home, manager) = setup();
        home.write_snapshot("work", &[("init.el", ";; v1")]);
        manager.set("work").unwrap();
        home.write_live(&[("init.el", ";; v2")]);

        run_archive(&manager, None).unwrap();

        home.assert_snapshot_contains("work", "init.el", ";; v2");
        assert_eq!(home.pointer_content(), "");
    }

    #[test]
    fn test_archive_without_live_fails() {
        let (_home, manager) = setup();

        let err = run_archive(&manager, Some("work")).unwrap_err();

        assert!(err.to_string().contains("No Emacs configuration"));
    }
}

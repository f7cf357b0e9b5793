//! CLI argument parsing using clap derive
//!
//! The surface is a handful of independent flags rather than subcommands.
//! When several are given, the first in the order list, set, current,
//! archive wins.

use clap::Parser;
use std::path::PathBuf;

/// Swap between named Emacs configurations
#[derive(Parser, Debug)]
#[command(name = "emacs-swap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// List available configs
    #[arg(long)]
    pub list: bool,

    /// Enable a config from the available configs
    #[arg(long, value_name = "CONFIG")]
    pub set: Option<String>,

    /// Show the currently used config
    #[arg(long)]
    pub current: bool,

    /// Archive the present config
    ///
    /// Re-saves the active config in place. When no config is active the
    /// name is taken from --name or asked for interactively.
    #[arg(long)]
    pub archive: bool,

    /// Name to archive an untracked config under (skips the prompt)
    #[arg(long, value_name = "NAME", requires = "archive")]
    pub name: Option<String>,

    /// Directory holding saved configs
    #[arg(long, value_name = "DIR", env = "EMACS_SWAP_ROOT")]
    pub root: Option<PathBuf>,

    /// Live configuration directory
    #[arg(long, value_name = "DIR", env = "EMACS_SWAP_LIVE")]
    pub live: Option<PathBuf>,
}

/// The single operation an invocation performs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    List,
    Set(String),
    Current,
    Archive { name: Option<String> },
    /// No flags: storage initialisation only
    Init,
}

impl Cli {
    /// Pick the action; the first matching flag wins.
    ///
    /// An empty `--set=` counts as not given.
    pub fn action(&self) -> Action {
        if self.list {
            return Action::List;
        }
        if let Some(name) = self.set.as_deref().filter(|n| !n.is_empty()) {
            return Action::Set(name.to_string());
        }
        if self.current {
            return Action::Current;
        }
        if self.archive {
            return Action::Archive {
                name: self.name.clone(),
            };
        }
        Action::Init
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_no_args() {
        let cli = Cli::parse_from(["emacs-swap"]);
        assert!(!cli.verbose);
        assert_eq!(cli.action(), Action::Init);
    }

    #[test]
    fn parse_short_verbose_flag() {
        let cli = Cli::parse_from(["emacs-swap", "-v"]);
        assert!(cli.verbose);
    }

    #[test]
    fn parse_set_with_equals() {
        let cli = Cli::parse_from(["emacs-swap", "--set=doom"]);
        assert_eq!(cli.action(), Action::Set("doom".into()));
    }

    #[test]
    fn parse_set_with_space() {
        let cli = Cli::parse_from(["emacs-swap", "--set", "doom"]);
        assert_eq!(cli.action(), Action::Set("doom".into()));
    }

    #[test]
    fn empty_set_is_ignored() {
        let cli = Cli::parse_from(["emacs-swap", "--set=", "--current"]);
        assert_eq!(cli.action(), Action::Current);
    }

    #[test]
    fn list_wins_over_everything() {
        let cli = Cli::parse_from(["emacs-swap", "--archive", "--current", "--set=x", "--list"]);
        assert_eq!(cli.action(), Action::List);
    }

    #[test]
    fn set_wins_over_current_and_archive() {
        let cli = Cli::parse_from(["emacs-swap", "--current", "--archive", "--set=x"]);
        assert_eq!(cli.action(), Action::Set("x".into()));
    }

    #[test]
    fn current_wins_over_archive() {
        let cli = Cli::parse_from(["emacs-swap", "--archive", "--current"]);
        assert_eq!(cli.action(), Action::Current);
    }

    #[test]
    fn archive_with_name() {
        let cli = Cli::parse_from(["emacs-swap", "--archive", "--name", "work"]);
        assert_eq!(
            cli.action(),
            Action::Archive {
                name: Some("work".into())
            }
        );
    }

    #[test]
    fn name_requires_archive() {
        let result = Cli::try_parse_from(["emacs-swap", "--name", "work"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_root_and_live_overrides() {
        let cli = Cli::parse_from(["emacs-swap", "--root", "/tmp/store", "--live", "/tmp/live"]);
        assert_eq!(cli.root, Some(PathBuf::from("/tmp/store")));
        assert_eq!(cli.live, Some(PathBuf::from("/tmp/live")));
    }
}

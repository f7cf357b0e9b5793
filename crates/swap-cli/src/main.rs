//! emacs-swap CLI
//!
//! Swaps the live Emacs configuration directory with named snapshots.

mod cli;
mod commands;
mod error;
mod interactive;

use clap::Parser;
use colored::Colorize;
use swap_core::{SwapLayout, SwapManager};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Action, Cli};
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| CliError::user(format!("Failed to set tracing subscriber: {e}")))?;
        tracing::debug!("Verbose mode enabled");
    }

    let layout = SwapLayout::resolve(cli.root.clone(), cli.live.clone())?;
    let manager = SwapManager::new(layout);
    manager.ensure_storage()?;

    execute_action(&manager, cli.action())
}

fn execute_action(manager: &SwapManager, action: Action) -> Result<()> {
    match action {
        Action::List => commands::run_list(manager),
        Action::Set(name) => commands::run_set(manager, &name),
        Action::Current => commands::run_current(manager),
        Action::Archive { name } => commands::run_archive(manager, name.as_deref()),
        Action::Init => {
            println!(
                "{} snapshot store ready at {}",
                "emacs-swap".green().bold(),
                manager.layout().root
            );
            println!();
            println!("Run {} for available options.", "emacs-swap --help".cyan());
            Ok(())
        }
    }
}

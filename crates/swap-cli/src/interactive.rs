//! Interactive prompts for CLI commands
//!
//! Uses dialoguer for terminal-based input. When no terminal is attached the
//! answer is read as a single line from stdin, so names can be piped in.

use colored::Colorize;
use console::Term;
use dialoguer::Input;
use std::io::{self, BufRead};
use swap_fs::validate_snapshot_name;

use crate::error::{CliError, Result};

/// Ask for the name to archive an untracked live config under.
///
/// Re-prompts until the name is usable as a snapshot directory.
pub fn prompt_snapshot_name() -> Result<String> {
    println!(
        "{} Preparing to archive present configuration.",
        "=>".blue().bold()
    );

    if !Term::stderr().is_term() {
        return read_snapshot_name(io::stdin().lock());
    }

    let name: String = Input::new()
        .with_prompt("Save the current config as")
        .validate_with(|input: &String| check_name(input))
        .interact_text()?;

    Ok(name.trim().to_string())
}

/// Read one line from `input` and check it as a snapshot name.
fn read_snapshot_name(mut input: impl BufRead) -> Result<String> {
    let mut line = String::new();
    input
        .read_line(&mut line)
        .map_err(|e| CliError::user(format!("Failed to read snapshot name: {e}")))?;

    let name = line.trim();
    validate_snapshot_name(name).map_err(swap_core::Error::from)?;
    Ok(name.to_string())
}

fn check_name(input: &str) -> std::result::Result<(), String> {
    validate_snapshot_name(input.trim()).map_err(|e| e.to_string())
}

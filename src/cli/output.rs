//! Terminal output helpers.
//!
//! Stdout carries only the data a command produces (a token, a key, a
//! plaintext) so it can be piped. Everything else goes to stderr.
//!
//! Color scheme (respects NO_COLOR):
//! - Red: errors
//! - Yellow: warnings
//! - Cyan: hints
//! - Dimmed: labels

use console::{style, StyledObject};
use serde::Serialize;

use crate::cli::CliError;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err() && console::colors_enabled_stderr()
}

fn paint<D>(value: D) -> StyledObject<D> {
    style(value).for_stderr()
}

/// Print an error message to stderr (red).
///
/// Example: `✗ no key found`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", paint("✗").red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a warning message to stderr (yellow).
pub fn warn(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", paint("⚠").yellow(), msg);
    } else {
        eprintln!("⚠ {}", msg);
    }
}

/// Print a hint message to stderr (cyan).
///
/// Example: `→ run: sealconf keygen`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", paint("→").cyan(), paint(msg).cyan());
    } else {
        eprintln!("→ {}", msg);
    }
}

/// Print a labelled value to stderr.
///
/// Example: `  key:  QWFh...`
pub fn kv(label: &str, value: &str) {
    if colors_enabled() {
        eprintln!("  {}  {}", paint(label).dim(), paint(value).bold());
    } else {
        eprintln!("  {}  {}", label, value);
    }
}

/// Print a command result on stdout, plain or as a JSON object.
///
/// # Errors
///
/// Returns `CliError::Json` if serialization fails.
pub fn data<T: Serialize>(value: &T, plain: &str, json: bool) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string(value)?);
    } else {
        println!("{}", plain);
    }
    Ok(())
}

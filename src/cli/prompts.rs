//! Warnings, errors and yes/no prompts for CLI output.

use std::io::Write;

use super::quiet;
use crate::terminal::{RED, RESET};

const YELLOW: &str = "\x1b[33m";

/// Yellow warning on stderr. Suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Red error on stderr. Always shown.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

pub fn clipboard_copied(count: usize) {
    if !quiet::enabled() {
        match count {
            1 => println!("*** -COPIED TO CLIPBOARD- ***"),
            n => println!("*** -{n} PASSWORDS COPIED TO CLIPBOARD- ***"),
        }
    }
}

/// Ask whether to print instead when the clipboard cannot be used.
/// Quiet or non-interactive runs fall back without asking.
pub fn clipboard_fallback_prompt(reason: &str) -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprintln!("{reason}");
    eprint!("Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_err() {
        return true;
    }
    matches!(input.trim().to_lowercase().as_str(), "" | "y" | "yes")
}

//! Terminal output utilities.
//!
//! Box drawing, ANSI helpers and screen control.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const RED: &str = "\x1b[38;5;9m";
pub const GREEN: &str = "\x1b[38;5;36m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

pub fn flush() {
    let _ = io::stdout().flush();
}

/// Leave raw mode and drop any lingering style.
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}");
    flush();
}

// ============================================================================
// Box Drawing
// ============================================================================

pub const BOX_WIDTH: usize = 48;
const INNER_WIDTH: usize = BOX_WIDTH - 4;

/// `┌─ Title ─────┐`
pub fn box_top(title: &str) {
    if title.is_empty() {
        println!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
        return;
    }
    let head = format!("─ {title} ");
    let rest = (BOX_WIDTH - 2).saturating_sub(head.chars().count());
    println!("┌{head}{}┐", "─".repeat(rest));
}

/// `│ content     │`, left aligned.
pub fn box_line(content: &str) {
    let pad = INNER_WIDTH.saturating_sub(display_width(content));
    println!("│ {content}{} │", " ".repeat(pad));
}

/// `│   content   │`, centered.
pub fn box_line_center(content: &str) {
    let total = INNER_WIDTH.saturating_sub(display_width(content));
    let left = total / 2;
    println!("│ {}{content}{} │", " ".repeat(left), " ".repeat(total - left));
}

/// `├─────────────┤`
pub fn box_rule() {
    println!("├{}┤", "─".repeat(BOX_WIDTH - 2));
}

/// `└─────────────┘`
pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// Two-column help row: flag on the left, description on the right.
pub fn box_opt(flag: &str, desc: &str) {
    const FLAG_COL: usize = 22;
    let desc_col = INNER_WIDTH - FLAG_COL;

    let mut lines: Vec<String> = Vec::new();
    for word in desc.split_whitespace() {
        match lines.last_mut() {
            Some(line) if line.len() + 1 + word.len() <= desc_col => {
                line.push(' ');
                line.push_str(word);
            }
            _ => lines.push(word.to_string()),
        }
    }

    let mut first = true;
    for line in lines.iter().map(String::as_str).chain(lines.is_empty().then_some("")) {
        let left = if first { flag } else { "" };
        first = false;
        println!(
            "│ {left:<width$}{line}{} │",
            " ".repeat(desc_col.saturating_sub(line.len())),
            width = FLAG_COL
        );
    }
}

/// Display width ignoring ANSI escape sequences.
fn display_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_skips_escape_codes() {
        assert_eq!(display_width("plain"), 5);
        assert_eq!(display_width(&format!("{RED}red{RESET}")), 3);
        assert_eq!(display_width("[x] ✓"), 5);
    }
}

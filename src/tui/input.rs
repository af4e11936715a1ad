use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, read};

use crate::exits;
use crate::terminal::{RawModeGuard, flush, reset_terminal};

/// Single-line editor with cursor movement.
///
/// Only characters passing `accept` are inserted. Returns `None` when the
/// user cancels with Esc or Ctrl+Q. Ctrl+C exits the program with the
/// same status as SIGINT.
pub fn get_editable_input(
    prompt: &str,
    initial_value: &str,
    accept: impl Fn(char) -> bool,
) -> Option<String> {
    let mut input: Vec<char> = initial_value.chars().collect();
    let mut cursor = input.len();
    let mut cancelled = false;

    // Raw mode is unavailable when stdin is not a terminal; fall back to
    // the initial value.
    let mut guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => return Some(initial_value.to_string()),
    };

    redraw(prompt, &input, cursor);

    loop {
        let key = match read() {
            Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => key,
            Ok(_) => continue,
            Err(_) => break,
        };
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => {
                // process::exit skips destructors
                reset_terminal();
                println!();
                std::process::exit(exits::INTERRUPTED);
            }
            KeyCode::Char('q') if ctrl => {
                cancelled = true;
                break;
            }
            KeyCode::Char('u') if ctrl => {
                input.clear();
                cursor = 0;
            }
            KeyCode::Esc => {
                cancelled = true;
                break;
            }
            KeyCode::Enter => break,
            KeyCode::Backspace if cursor > 0 => {
                cursor -= 1;
                input.remove(cursor);
            }
            KeyCode::Delete if cursor < input.len() => {
                input.remove(cursor);
            }
            KeyCode::Left => cursor = cursor.saturating_sub(1),
            KeyCode::Right => cursor = (cursor + 1).min(input.len()),
            KeyCode::Home => cursor = 0,
            KeyCode::End => cursor = input.len(),
            KeyCode::Char(c) if !ctrl && accept(c) => {
                input.insert(cursor, c);
                cursor += 1;
            }
            _ => {}
        }

        redraw(prompt, &input, cursor);
    }

    guard.release();
    println!();

    if cancelled {
        None
    } else {
        Some(input.into_iter().collect())
    }
}

fn redraw(prompt: &str, input: &[char], cursor: usize) {
    let text: String = input.iter().collect();
    // \x1b[K clears leftovers from a longer previous value
    print!("\r{prompt}: {text}\x1b[K");
    print!("\x1b[{}G", prompt.chars().count() + 3 + cursor);
    flush();
}

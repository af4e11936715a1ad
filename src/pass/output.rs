//! Password output: terminal lines, result card and clipboard.

use std::io::{self, Write};

use copypasta::{ClipboardContext, ClipboardProvider};
use log::debug;
use zeroize::{Zeroize, Zeroizing};

use super::{GeneratedPassword, Selection, charset, entropy};
use crate::error::Error;
use crate::terminal::{BOLD, DIM, RESET, box_bottom, box_line, box_line_center, box_top};

/// Write one password per line.
pub fn write_lines<W: Write>(out: &mut W, passwords: &[GeneratedPassword]) -> io::Result<()> {
    for pass in passwords {
        out.write_all(pass.as_str().as_bytes())?;
        out.write_all(b"\n")?;
    }
    out.flush()
}

/// All passwords newline-separated, for the clipboard.
pub fn joined(passwords: &[GeneratedPassword]) -> Zeroizing<String> {
    let mut text = Zeroizing::new(String::new());
    for (i, pass) in passwords.iter().enumerate() {
        if i > 0 {
            text.push('\n');
        }
        text.push_str(pass.as_str());
    }
    text
}

/// One-line entropy summary, e.g. `37.6 bits (Fair) • Charset: 26 chars`.
pub fn entropy_report(selection: &Selection, length: usize) -> String {
    let bits = entropy::for_selection(selection, length);
    format!(
        "{:.1} bits ({}) • Charset: {} chars",
        bits,
        entropy::strength(bits),
        charset::size(selection)
    )
}

/// Result card shown under the form.
pub fn print_card(password: &GeneratedPassword, selection: &Selection) {
    box_top("Result");
    box_line(&format!("{DIM}Press [c] to copy{RESET}"));
    box_line("");
    box_line_center(&format!("{BOLD}{}{RESET}", password.as_str()));
    box_line("");
    box_line(&format!(
        "{DIM}{}{RESET}",
        entropy_report(selection, password.len())
    ));
    box_bottom();
}

/// Open the system clipboard.
pub fn clipboard() -> Result<ClipboardContext, Error> {
    ClipboardContext::new().map_err(|e| Error::Clipboard(e.to_string()))
}

/// Put `text` on the clipboard.
pub fn copy_to_clipboard(ctx: &mut ClipboardContext, text: &str) -> Result<(), Error> {
    ctx.set_contents(text.to_owned())
        .map_err(|e| Error::Clipboard(e.to_string()))?;

    // Read back so the provider has taken ownership before we return.
    if let Ok(mut readback) = ctx.get_contents() {
        readback.zeroize();
    }
    debug!("copied {} bytes to clipboard", text.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::{PasswordLength, generate_batch};
    use crate::random::FixedSequence;

    fn batch() -> Vec<GeneratedPassword> {
        let mut rng = FixedSequence::new(vec![0.0, 0.5]);
        let len = PasswordLength::try_from(4).unwrap();
        generate_batch(&Selection::default(), len, 2, &mut rng).unwrap()
    }

    #[test]
    fn lines_end_with_newline() {
        let mut out = Vec::new();
        write_lines(&mut out, &batch()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "anan\nanan\n");
    }

    #[test]
    fn joined_has_no_trailing_newline() {
        assert_eq!(joined(&batch()).as_str(), "anan\nanan");
        assert_eq!(joined(&[]).as_str(), "");
    }

    #[test]
    fn report_mentions_strength_and_charset() {
        let report = entropy_report(&Selection::default(), 8);
        assert_eq!(report, "37.6 bits (Fair) • Charset: 26 chars");
    }
}

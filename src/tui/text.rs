use crate::form::FormState;
use crate::pass::{CharClass, output};
use crate::terminal::{
    DIM, GREEN, RED, RESET, box_bottom, box_line, box_line_center, box_opt, box_rule, box_top,
};

/// Checkbox order on the form; the number is the menu key.
pub const FORM_ORDER: [CharClass; 4] = [
    CharClass::Lowercase,
    CharClass::Uppercase,
    CharClass::Digits,
    CharClass::Symbols,
];

pub fn enter_prompt() -> &'static str {
    "Enter option (or press Enter to generate)"
}

/// Draw the whole form: length field, class toggles, actions and result.
pub fn print_form(form: &FormState, notice: Option<&str>) {
    box_top("Password Generator");

    let shown = if form.length_input().is_empty() {
        format!("{DIM}Ex. 8{RESET}")
    } else {
        form.length_input().to_string()
    };
    box_line(&format!("  l) Password Length: {shown}"));
    if let Some(msg) = length_error(form) {
        box_line(&format!("     {RED}{msg}{RESET}"));
    }

    box_rule();
    for (i, class) in FORM_ORDER.iter().enumerate() {
        let mark = if form.selection().contains(*class) {
            format!("{GREEN}[x]{RESET}")
        } else {
            "[ ]".to_string()
        };
        box_line(&format!("  {}) {mark} {}", i + 1, class.label()));
    }

    if let Some(crate::error::Error::Generation(e)) = form.error() {
        box_line(&format!("     {RED}{e}{RESET}"));
    }

    box_rule();
    box_line_center("[Enter] Generate   [r] Reset   [q] Quit");
    box_line_center(&format!("{DIM}[c] Copy result   [h] Help{RESET}"));
    box_bottom();
    println!();

    if let Some(password) = form.password() {
        output::print_card(password, form.selection());
        println!();
    }

    if let Some(notice) = notice {
        println!("{notice}");
        println!();
    }
}

/// Message for the length field: a failed submit, or the live check once
/// the user has typed something.
fn length_error(form: &FormState) -> Option<String> {
    if let Some(crate::error::Error::Validation(e)) = form.error() {
        return Some(e.to_string());
    }
    if form.length_input().is_empty() {
        return None;
    }
    form.validate().err().map(|e| e.to_string())
}

pub fn print_help() {
    box_top("passform");
    box_line("Generate a password from selected character classes.");
    box_line("Run without arguments to open the interactive form.");
    box_rule();
    box_line("Usage: passform -l <LENGTH> [OPTIONS]");
    box_line("");
    box_opt("-l, --length <LEN>", "Password length, 4 to 16");
    box_opt("-a, --lowercase", "Include lowercase letters");
    box_opt("-A, --uppercase", "Include uppercase letters");
    box_opt("-d, --digits", "Include numbers");
    box_opt("-s, --symbols", "Include symbols !@#$%^&*()_+");
    box_opt("-n, --number <N>", "How many passwords (default 1)");
    box_opt("-b, --board", "Copy to clipboard instead of printing");
    box_opt("-e, --entropy", "Print the entropy estimate to stderr");
    box_opt("-i, --interactive", "Open the form, prefilled from flags");
    box_opt("-q, --quiet", "Suppress warnings and prompts");
    box_opt("-h, --help", "Show this help");
    box_opt("-v, --version", "Show version");
    box_line("");
    box_line("Without class flags only lowercase is used.");
    box_rule();
    box_line("Form keys");
    box_line("");
    box_opt("1-4", "Toggle a character class");
    box_opt("l", "Edit the length");
    box_opt("Enter", "Generate");
    box_opt("r", "Reset the form");
    box_opt("c", "Copy the result");
    box_opt("q", "Quit (Ctrl+C works anywhere)");
    box_bottom();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::random::FixedSequence;

    #[test]
    fn no_length_message_until_typed() {
        let form = FormState::new();
        assert_eq!(length_error(&form), None);
    }

    #[test]
    fn live_length_message_after_typing() {
        let mut form = FormState::new();
        form.set_length_input("3");
        assert_eq!(
            length_error(&form),
            Some(ValidationError::TooShort.to_string())
        );
        form.set_length_input("9");
        assert_eq!(length_error(&form), None);
    }

    #[test]
    fn submit_error_shown_for_empty_field() {
        let mut form = FormState::new();
        let _ = form.submit(&mut FixedSequence::new(vec![0.0]));
        assert_eq!(length_error(&form), Some("Length is required".to_string()));
    }

    #[test]
    fn form_order_matches_screen() {
        let labels: Vec<_> = FORM_ORDER.iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            [
                "Include lowercase",
                "Include Uppercase",
                "Include Numbers",
                "Include Symbols"
            ]
        );
    }
}

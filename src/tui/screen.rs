use copypasta::ClipboardContext;
use log::{info, warn};

use super::{FORM_ORDER, enter_prompt, get_editable_input, print_form, print_help};
use crate::error::Result;
use crate::form::FormState;
use crate::pass::{CharClass, output};
use crate::random::ThreadRandom;
use crate::settings::Settings;
use crate::terminal::{GREEN, RED, RESET, clear, reset_terminal};

/// Interactive form loop. Returns when the user quits.
pub fn run_form(settings: &Settings) -> Result<()> {
    reset_terminal();

    let mut form = FormState::from_settings(settings);
    let mut rng = ThreadRandom::new();
    let mut clipboard: Option<ClipboardContext> = None;
    let mut notice: Option<String> = None;

    loop {
        clear();
        print_form(&form, notice.take().as_deref());

        let Some(choice) = get_editable_input(enter_prompt(), "", |_| true) else {
            continue;
        };

        let choice = choice.trim();
        if let Some(class) = class_for_key(choice) {
            form.toggle(class);
            form.clear_error();
            continue;
        }

        match choice {
            "" => {
                if form.submit(&mut rng).is_ok() {
                    info!("password generated from form");
                }
            }
            "l" | "L" => {
                let edited = get_editable_input("Password Length", form.length_input(), |c| {
                    c.is_ascii_digit()
                });
                if let Some(text) = edited {
                    apply_length_edit(&mut form, text);
                }
            }
            "r" | "R" => form.reset(),
            "c" | "C" => notice = Some(copy_result(&form, &mut clipboard)),
            "h" | "H" | "?" => {
                clear();
                print_help();
                let _ = get_editable_input("Press Enter to return", "", |_| false);
            }
            "q" | "Q" => break,
            other => notice = Some(format!("{RED}Invalid option: {other}{RESET}")),
        }
    }

    clear();
    Ok(())
}

/// Store the edited length text as typed; validation reports bad values.
fn apply_length_edit(form: &mut FormState, text: String) {
    form.set_length_input(text);
    form.clear_error();
}

/// Copy the current result and return the line to show under the form.
fn copy_result(form: &FormState, clipboard: &mut Option<ClipboardContext>) -> String {
    let Some(password) = form.password() else {
        return format!("{RED}Nothing to copy yet{RESET}");
    };

    let copied = open_clipboard(clipboard)
        .and_then(|ctx| output::copy_to_clipboard(ctx, password.as_str()));
    match copied {
        Ok(()) => format!("{GREEN}*** -COPIED TO CLIPBOARD- ***{RESET}"),
        Err(e) => {
            warn!("copy failed: {e}");
            format!("{RED}{e}{RESET}")
        }
    }
}

fn open_clipboard(slot: &mut Option<ClipboardContext>) -> Result<&mut ClipboardContext> {
    let ctx = match slot.take() {
        Some(ctx) => ctx,
        None => output::clipboard()?,
    };
    Ok(slot.insert(ctx))
}

/// `"1"`..`"4"` map to the checkboxes in screen order.
fn class_for_key(key: &str) -> Option<CharClass> {
    let n: usize = key.parse().ok()?;
    FORM_ORDER.get(n.checked_sub(1)?).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, ValidationError};
    use crate::random::FixedSequence;

    #[test]
    fn number_keys_map_to_checkboxes() {
        assert_eq!(class_for_key("1"), Some(CharClass::Lowercase));
        assert_eq!(class_for_key("2"), Some(CharClass::Uppercase));
        assert_eq!(class_for_key("3"), Some(CharClass::Digits));
        assert_eq!(class_for_key("4"), Some(CharClass::Symbols));
        assert_eq!(class_for_key("0"), None);
        assert_eq!(class_for_key("5"), None);
        assert_eq!(class_for_key("l"), None);
        assert_eq!(class_for_key(""), None);
    }

    #[test]
    fn length_edit_is_stored_as_typed() {
        let mut form = FormState::new();
        apply_length_edit(&mut form, "100".to_string());
        assert_eq!(form.length_input(), "100");
        assert!(matches!(
            form.validate(),
            Err(Error::Validation(ValidationError::TooLong))
        ));

        apply_length_edit(&mut form, "16".to_string());
        assert_eq!(form.validate().ok().map(|l| l.get()), Some(16));
    }

    #[test]
    fn length_edit_clears_submit_error() {
        let mut form = FormState::new();
        let _ = form.submit(&mut FixedSequence::new(vec![0.0]));
        assert!(form.error().is_some());
        apply_length_edit(&mut form, "8".to_string());
        assert!(form.error().is_none());
    }

    #[test]
    fn copy_without_result_is_refused() {
        let form = FormState::new();
        let mut slot = None;
        let notice = copy_result(&form, &mut slot);
        assert!(notice.contains("Nothing to copy yet"));
        assert!(slot.is_none());
    }
}

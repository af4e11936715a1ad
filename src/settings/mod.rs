//! Generation settings.
//!
//! Built from defaults and then overridden by command-line flags. Nothing
//! here is persisted between runs.

use crate::pass::Selection;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Initial character classes.
    pub selection: Selection,
    /// Raw length text, validated at generation time.
    pub length_input: String,
    pub number_of_passwords: usize,
    pub to_clipboard: bool,
    pub show_entropy: bool,
    pub interactive: bool,
    pub quiet: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            selection: Selection::default(),
            length_input: String::new(),
            number_of_passwords: 1,
            to_clipboard: false,
            show_entropy: false,
            interactive: false,
            quiet: false,
        }
    }
}

use crate::pass::CharClass;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub clipboard: bool,
    pub entropy: bool,
    pub interactive: bool,
    /// Classes named on the command line, in the order given.
    pub classes: Vec<CharClass>,
    /// Raw length text, validated later.
    pub length: Option<String>,
    pub number: Option<usize>,
}

impl CliFlags {
    /// True when the user named at least one character class.
    pub fn has_class_flags(&self) -> bool {
        !self.classes.is_empty()
    }
}

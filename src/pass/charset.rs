//! Character classes and alphabet building.

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+";

/// One of the four fixed character categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Uppercase,
    Lowercase,
    Digits,
    Symbols,
}

impl CharClass {
    /// Alphabet order. Selected classes are concatenated in this order.
    pub const ALL: [CharClass; 4] = [
        CharClass::Uppercase,
        CharClass::Lowercase,
        CharClass::Digits,
        CharClass::Symbols,
    ];

    pub fn chars(self) -> &'static str {
        match self {
            CharClass::Uppercase => UPPERCASE,
            CharClass::Lowercase => LOWERCASE,
            CharClass::Digits => DIGITS,
            CharClass::Symbols => SYMBOLS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CharClass::Uppercase => "Include Uppercase",
            CharClass::Lowercase => "Include lowercase",
            CharClass::Digits => "Include Numbers",
            CharClass::Symbols => "Include Symbols",
        }
    }
}

/// Which character classes the user asked for.
///
/// An all-false selection is representable; generation rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl Selection {
    /// Nothing selected.
    pub const fn none() -> Self {
        Selection {
            lowercase: false,
            uppercase: false,
            digits: false,
            symbols: false,
        }
    }

    pub fn contains(&self, class: CharClass) -> bool {
        match class {
            CharClass::Uppercase => self.uppercase,
            CharClass::Lowercase => self.lowercase,
            CharClass::Digits => self.digits,
            CharClass::Symbols => self.symbols,
        }
    }

    pub fn set(&mut self, class: CharClass, on: bool) {
        let flag = match class {
            CharClass::Uppercase => &mut self.uppercase,
            CharClass::Lowercase => &mut self.lowercase,
            CharClass::Digits => &mut self.digits,
            CharClass::Symbols => &mut self.symbols,
        };
        *flag = on;
    }

    pub fn toggle(&mut self, class: CharClass) {
        self.set(class, !self.contains(class));
    }

    pub fn is_empty(&self) -> bool {
        !CharClass::ALL.iter().any(|&c| self.contains(c))
    }

    /// Selected classes in alphabet order.
    pub fn classes(&self) -> impl Iterator<Item = CharClass> + '_ {
        CharClass::ALL.into_iter().filter(|&c| self.contains(c))
    }
}

impl Default for Selection {
    /// Lowercase only.
    fn default() -> Self {
        Selection {
            lowercase: true,
            ..Selection::none()
        }
    }
}

impl FromIterator<CharClass> for Selection {
    fn from_iter<I: IntoIterator<Item = CharClass>>(iter: I) -> Self {
        let mut selection = Selection::none();
        for class in iter {
            selection.set(class, true);
        }
        selection
    }
}

/// Ordered pool of characters a password is drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet(Vec<char>);

impl Alphabet {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<char> {
        self.0.get(idx).copied()
    }

    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&c)
    }

    pub fn as_slice(&self) -> &[char] {
        &self.0
    }
}

/// Build the alphabet for a selection.
pub fn build(selection: &Selection) -> Alphabet {
    let mut chars = Vec::with_capacity(size(selection));
    for class in selection.classes() {
        chars.extend(class.chars().chars());
    }
    Alphabet(chars)
}

/// Alphabet size for a selection, without building it.
pub fn size(selection: &Selection) -> usize {
    selection.classes().map(|c| c.chars().len()).sum()
}

//! Requested length validation.

use std::num::IntErrorKind;
use std::str::FromStr;

use crate::error::ValidationError;

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 16;

/// A password length known to be within `MIN_LENGTH..=MAX_LENGTH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PasswordLength(usize);

impl PasswordLength {
    pub fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<usize> for PasswordLength {
    type Error = ValidationError;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        if n < MIN_LENGTH {
            Err(ValidationError::TooShort)
        } else if n > MAX_LENGTH {
            Err(ValidationError::TooLong)
        } else {
            Ok(PasswordLength(n))
        }
    }
}

impl FromStr for PasswordLength {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_length(s)
    }
}

impl std::fmt::Display for PasswordLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Parse and bounds-check raw length text.
pub fn validate_length(input: &str) -> Result<PasswordLength, ValidationError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ValidationError::Missing);
    }

    let n: i64 = input.parse().map_err(|e: std::num::ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow => ValidationError::TooLong,
        IntErrorKind::NegOverflow => ValidationError::TooShort,
        _ => ValidationError::NotANumber,
    })?;

    if n < MIN_LENGTH as i64 {
        return Err(ValidationError::TooShort);
    }
    PasswordLength::try_from(n as usize)
}

//! Error types shared by the core and the front ends.

use thiserror::Error;

/// Why a requested length was rejected.
///
/// The display strings are shown to the user as-is.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Length is required")]
    Missing,
    #[error("Minimum Length of the Password should be 4 characters")]
    TooShort,
    #[error("Maximum Length of the password should be 16 characters")]
    TooLong,
    #[error("Length must be a number")]
    NotANumber,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationError {
    #[error("At least one character class must be selected")]
    EmptyAlphabet,
}

/// Anything that can stop a generation attempt in the CLI or the form.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error("Clipboard error: {0}")]
    Clipboard(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

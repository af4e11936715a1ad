//! Password generation and output.

pub mod charset;
pub mod entropy;
mod generate;
pub mod length;
pub mod output;

pub use charset::{Alphabet, CharClass, Selection};
pub use generate::{GeneratedPassword, generate_batch, generate_from_alphabet, generate_password};
pub use length::{MAX_LENGTH, MIN_LENGTH, PasswordLength, validate_length};

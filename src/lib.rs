//! Password generation from selected character classes, with an
//! interactive terminal form and a one-shot CLI.
//!
//! ```
//! use passform::pass::{self, Selection};
//! use passform::random::ThreadRandom;
//!
//! let length = pass::validate_length("12").unwrap();
//! let password = pass::generate_password(&Selection::default(), length, &mut ThreadRandom::new()).unwrap();
//! assert_eq!(password.len(), 12);
//! ```

pub mod cli;
pub mod error;
pub mod exits;
pub mod form;
pub mod pass;
pub mod random;
pub mod settings;
pub mod terminal;
pub mod tui;

pub use error::{Error, GenerationError, Result, ValidationError};
pub use form::FormState;
pub use settings::Settings;

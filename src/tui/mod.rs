//! Interactive password form.

mod input;
mod screen;
mod text;

pub use input::*;
pub use screen::run_form;
pub use text::*;

use std::io;

use crate::cli::quiet;
use crate::error::{Error, Result};
use crate::settings::Settings;

/// Run the form, prefilled from `settings`.
pub fn run(settings: &Settings) -> Result<()> {
    if !quiet::is_interactive() {
        return Err(Error::Io(io::Error::new(
            io::ErrorKind::Unsupported,
            "the interactive form needs a terminal; pass --length to generate directly",
        )));
    }
    run_form(settings)
}

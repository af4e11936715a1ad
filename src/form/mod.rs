//! State behind the password form.
//!
//! One explicit struct holds everything the screen shows: the selected
//! classes, the length field, the last result and the last error.

use log::info;

use crate::error::Error;
use crate::pass::{self, CharClass, GeneratedPassword, PasswordLength, Selection};
use crate::random::RandomSource;
use crate::settings::Settings;

#[derive(Debug, Default)]
pub struct FormState {
    selection: Selection,
    length_input: String,
    password: Option<GeneratedPassword>,
    error: Option<Error>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefill from settings (e.g. flags passed alongside `--interactive`).
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            selection: settings.selection,
            length_input: settings.length_input.clone(),
            ..Self::default()
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn toggle(&mut self, class: CharClass) {
        self.selection.toggle(class);
    }

    pub fn length_input(&self) -> &str {
        &self.length_input
    }

    pub fn set_length_input(&mut self, input: impl Into<String>) {
        self.length_input = input.into();
    }

    /// Whether the current length text would be accepted.
    pub fn validate(&self) -> Result<PasswordLength, Error> {
        Ok(pass::validate_length(&self.length_input)?)
    }

    /// Validate, generate and keep the result.
    ///
    /// On failure the error is kept for display and any previous password
    /// stays in place.
    pub fn submit<R>(&mut self, rng: &mut R) -> Result<&GeneratedPassword, &Error>
    where
        R: RandomSource + ?Sized,
    {
        let outcome = self.validate().and_then(|length| {
            pass::generate_password(&self.selection, length, rng).map_err(Error::from)
        });

        match outcome {
            Ok(password) => {
                info!("form generated a {}-character password", password.len());
                self.error = None;
                Ok(&*self.password.insert(password))
            }
            Err(e) => Err(&*self.error.insert(e)),
        }
    }

    pub fn password(&self) -> Option<&GeneratedPassword> {
        self.password.as_ref()
    }

    pub fn is_generated(&self) -> bool {
        self.password.is_some()
    }

    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Back to an untouched form: lowercase only, empty length, no result.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

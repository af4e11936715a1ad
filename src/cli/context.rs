//! CLI context: bundles settings, parsed flags and the random source.

use std::io;
use std::process::ExitCode;

use log::{info, warn};

use super::{CliFlags, ParseError, prompts, quiet};
use crate::error::{Error, Result};
use crate::pass::{self, PasswordLength, output};
use crate::random::ThreadRandom;
use crate::settings::Settings;
use crate::tui;

/// Early exit. Not an error, just done.
pub struct Done;

pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
}

/// Parse `args`, run once, and map the outcome to an exit status.
pub fn run(args: Vec<String>) -> ExitCode {
    let mut ctx = match Context::new(&args) {
        Ok(ctx) => ctx,
        Err(e) => {
            prompts::error(&e.to_string());
            prompts::error("Try --help for usage.");
            return ExitCode::from(2);
        }
    };

    match ctx.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            prompts::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

impl Context {
    pub fn new(args: &[String]) -> std::result::Result<Self, ParseError> {
        let flags = super::parse(args)?;
        let mut ctx = Self {
            settings: Settings::default(),
            flags,
        };
        ctx.apply_flags();
        Ok(ctx)
    }

    pub fn run(&mut self) -> Result<()> {
        quiet::set(self.settings.quiet);
        if let Err(Done) = self.handle_info_flags() {
            return Ok(());
        }
        if self.settings.interactive {
            return tui::run(&self.settings);
        }
        self.generate_output()
    }

    fn handle_info_flags(&self) -> std::result::Result<(), Done> {
        if self.flags.help {
            tui::print_help();
            return Err(Done);
        }
        if self.flags.version {
            println!("passform {}", env!("CARGO_PKG_VERSION"));
            return Err(Done);
        }
        Ok(())
    }

    /// Layer CLI flags over the default settings.
    fn apply_flags(&mut self) {
        let flags = &self.flags;
        let settings = &mut self.settings;

        if flags.has_class_flags() {
            settings.selection = flags.classes.iter().copied().collect();
        }
        if let Some(ref length) = flags.length {
            settings.length_input = length.clone();
        }
        if let Some(n) = flags.number {
            settings.number_of_passwords = n;
        }
        settings.to_clipboard = flags.clipboard;
        settings.show_entropy = flags.entropy;
        settings.interactive = flags.interactive;
        settings.quiet = flags.quiet;
    }

    /// Validate, generate and print or copy.
    pub fn generate_output(&mut self) -> Result<()> {
        let length = pass::validate_length(&self.settings.length_input)?;
        let mut rng = ThreadRandom::new();
        let passwords = pass::generate_batch(
            &self.settings.selection,
            length,
            self.settings.number_of_passwords,
            &mut rng,
        )?;
        info!(
            "generated {} password(s) of length {}",
            passwords.len(),
            length
        );

        // Asked for explicitly, so quiet mode does not hide it.
        if let Some(report) = self.entropy_line(length) {
            eprintln!("{report}");
        }

        if self.settings.to_clipboard {
            let copied = output::clipboard().and_then(|mut ctx| {
                output::copy_to_clipboard(&mut ctx, &output::joined(&passwords))
            });
            match copied {
                Ok(()) => {
                    prompts::clipboard_copied(passwords.len());
                    return Ok(());
                }
                Err(e) => {
                    warn!("clipboard unavailable: {e}");
                    if !prompts::clipboard_fallback_prompt(&e.to_string()) {
                        return Err(e);
                    }
                }
            }
        }

        let stdout = io::stdout();
        output::write_lines(&mut stdout.lock(), &passwords).map_err(Error::from)
    }

    fn entropy_line(&self, length: PasswordLength) -> Option<String> {
        self.settings
            .show_entropy
            .then(|| output::entropy_report(&self.settings.selection, length.get()))
    }
}

use thiserror::Error;

use super::CliFlags;
use crate::pass::CharClass;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Missing value for {0}")]
    MissingValue(String),
    #[error("Unknown argument: {0}")]
    UnknownArg(String),
}

/// Parse `args` (including the program name at index 0).
pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut rest = args.iter().skip(1);

    while let Some(arg) = rest.next() {
        let mut value = || {
            rest.next()
                .cloned()
                .ok_or_else(|| ParseError::MissingValue(arg.clone()))
        };

        match arg.as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "-e" | "--entropy" => flags.entropy = true,
            "-i" | "--interactive" => flags.interactive = true,
            "-a" | "--lowercase" => flags.classes.push(CharClass::Lowercase),
            "-A" | "--uppercase" => flags.classes.push(CharClass::Uppercase),
            "-d" | "--digits" => flags.classes.push(CharClass::Digits),
            "-s" | "--symbols" => flags.classes.push(CharClass::Symbols),
            "-l" | "--length" => flags.length = Some(value()?),
            "-n" | "--number" => {
                let raw = value()?;
                flags.number = match raw.parse::<usize>() {
                    Ok(n) if n > 0 => Some(n),
                    _ => return Err(ParseError::InvalidNumber(raw)),
                };
            }
            other => return Err(ParseError::UnknownArg(other.to_string())),
        }
    }

    Ok(flags)
}

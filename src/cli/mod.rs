mod context;
mod flags;
mod parse;
pub mod prompts;
pub mod quiet;

pub use context::{Context, Done, run};
pub use flags::CliFlags;
pub use parse::{ParseError, parse};

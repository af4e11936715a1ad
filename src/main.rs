use std::env;
use std::process::ExitCode;

use passform::{Settings, cli, exits, tui};

fn main() -> ExitCode {
    exits::install_handlers();
    exits::disable_core_dumps();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .init();

    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 => match tui::run(&Settings::default()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                cli::prompts::error(&e.to_string());
                ExitCode::FAILURE
            }
        },
        _ => cli::run(args),
    }
}

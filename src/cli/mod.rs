mod args;
mod errors;
mod handlers;
mod io;
mod logging;

use base91x::Settings;
use clap::Parser;
use std::process::ExitCode;

use args::{Cli, Mode};
use errors::CliError;

pub fn run() -> ExitCode {
    logging::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            tracing::debug!("rejected command line: {}", e);
            eprintln!("{}", CliError::Usage);
            return ExitCode::FAILURE;
        }
    };

    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: &Cli) -> Result<(), CliError> {
    let settings =
        Settings::load_with_overrides().map_err(|e| CliError::Config(e.to_string()))?;

    match cli.mode() {
        Mode::Encode => handlers::encode::handle(cli, &settings),
        Mode::Decode => handlers::decode::handle(cli, &settings),
    }
}

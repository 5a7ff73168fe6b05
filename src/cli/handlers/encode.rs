use crate::cli::{
    args::Cli,
    errors::CliError,
    io::{read_file, write_file},
};
use base91x::Settings;
use std::time::Instant;

pub fn handle(args: &Cli, settings: &Settings) -> Result<(), CliError> {
    let data = read_file(&args.input, settings.max_size)?;

    let started = Instant::now();
    let encoded = base91x::encode_wrapped(&data, settings.wrap);
    tracing::debug!(
        input = data.len(),
        output = encoded.len(),
        wrap = settings.wrap,
        elapsed = ?started.elapsed(),
        "encoded"
    );

    write_file(&args.output, encoded.as_bytes())
}

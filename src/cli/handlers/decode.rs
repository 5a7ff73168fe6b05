use crate::cli::{
    args::Cli,
    errors::CliError,
    io::{read_file, write_file},
};
use base91x::Settings;
use std::time::Instant;

pub fn handle(args: &Cli, settings: &Settings) -> Result<(), CliError> {
    // Any bytes are accepted; non-symbols are skipped by the decoder.
    let text = read_file(&args.input, settings.max_size)?;

    let started = Instant::now();
    let data = base91x::decode(&text);
    tracing::debug!(
        input = text.len(),
        output = data.len(),
        elapsed = ?started.elapsed(),
        "decoded"
    );

    write_file(&args.output, &data)
}

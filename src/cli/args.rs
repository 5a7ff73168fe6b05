use clap::{ArgGroup, Parser};
use std::path::PathBuf;

/// Usage line printed for any malformed command line.
pub const USAGE: &str = "base91x -e|-d <in-file> <out-file>";

/// Exactly one mode flag and two file paths; help and version flags are off.
#[derive(Parser, Debug)]
#[command(name = "base91x")]
#[command(about = "Encode and decode files with the quote-free base91x alphabet", long_about = None)]
#[command(override_usage = USAGE, disable_help_flag = true, disable_version_flag = true)]
#[command(group(ArgGroup::new("mode").required(true).args(["encode", "decode"])))]
pub struct Cli {
    /// Encode the input file
    #[arg(short = 'e')]
    pub encode: bool,

    /// Decode the input file
    #[arg(short = 'd')]
    pub decode: bool,

    /// File to read
    #[arg(value_name = "IN_FILE")]
    pub input: PathBuf,

    /// File to write, created or truncated
    #[arg(value_name = "OUT_FILE")]
    pub output: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Encode,
    Decode,
}

impl Cli {
    pub fn mode(&self) -> Mode {
        if self.encode {
            Mode::Encode
        } else {
            Mode::Decode
        }
    }
}

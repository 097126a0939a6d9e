use clap::{Args, Subcommand};
use std::path::{Path, PathBuf};

use bitframe_frame::DEFAULT_CHUNK_SIZE;
use bitframe_text::STDIO_PATH;

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod decode;
pub mod encode;
pub mod inspect;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Frame a bit text stream.
    Encode(EncodeArgs),
    /// Recover data from a framed bit text stream.
    Decode(DecodeArgs),
    /// Print a per-frame report of a framed bit text stream.
    Inspect(InspectArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Encode(args) => encode::run(args, format),
        Command::Decode(args) => decode::run(args, format),
        Command::Inspect(args) => inspect::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Bit text to frame (`-` for stdin).
    #[arg(default_value = "stream.txt")]
    pub input: PathBuf,
    /// Where to write the framed stream (`-` for stdout).
    #[arg(default_value = "codedStream.txt")]
    pub output: PathBuf,
    /// Data bits per frame.
    #[arg(long, value_name = "BITS", env = "BITFRAME_CHUNK_SIZE", default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: usize,
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Framed bit text to decode (`-` for stdin).
    #[arg(default_value = "codedStream.txt")]
    pub input: PathBuf,
    /// Where to write the recovered data (`-` for stdout).
    #[arg(default_value = "decodedStream.txt")]
    pub output: PathBuf,
    /// Exit with an error if any frame failed its checksum.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Framed bit text to inspect (`-` for stdin).
    #[arg(default_value = "codedStream.txt")]
    pub input: PathBuf,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

/// Whether stdout carries bit text, so reports must go elsewhere.
pub(crate) fn writes_stdout(path: &Path) -> bool {
    path.as_os_str() == STDIO_PATH
}

mod cmd;
mod exit;
mod logging;
mod output;

use clap::Parser;

use crate::cmd::Command;
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "bitframe", version, about = "Bit-stuffed, CRC-protected framing CLI")]
struct Cli {
    /// Report format. Defaults to a table on a terminal, JSON otherwise.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(
        long,
        value_name = "FORMAT",
        env = "BITFRAME_LOG_FORMAT",
        default_value = "text",
        global = true
    )]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(
        long,
        value_name = "LEVEL",
        env = "BITFRAME_LOG_LEVEL",
        default_value = "warn",
        global = true
    )]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    let result = cmd::run(cli.command, format);

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn encode_uses_classic_file_names() {
        let cli = Cli::try_parse_from(["bitframe", "encode"]).expect("encode should parse");
        match cli.command {
            Command::Encode(args) => {
                assert_eq!(args.input, Path::new("stream.txt"));
                assert_eq!(args.output, Path::new("codedStream.txt"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_chunk_size() {
        let cli = Cli::try_parse_from(["bitframe", "encode", "in.txt", "-", "--chunk-size", "16"])
            .expect("chunk size should parse");
        match cli.command {
            Command::Encode(args) => {
                assert_eq!(args.chunk_size, 16);
                assert_eq!(args.output, Path::new("-"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_non_numeric_chunk_size() {
        let err = Cli::try_parse_from(["bitframe", "encode", "--chunk-size", "lots"])
            .expect_err("non-numeric chunk size should fail");
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn parses_decode_strict_and_global_flags() {
        let cli = Cli::try_parse_from([
            "bitframe",
            "decode",
            "--strict",
            "--format",
            "json",
            "--log-level",
            "debug",
        ])
        .expect("decode args should parse");

        assert!(matches!(cli.format, Some(OutputFormat::Json)));
        assert_eq!(cli.log_level, LogLevel::Debug);
        match cli.command {
            Command::Decode(args) => {
                assert!(args.strict);
                assert_eq!(args.input, Path::new("codedStream.txt"));
                assert_eq!(args.output, Path::new("decodedStream.txt"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_inspect_subcommand() {
        let cli = Cli::try_parse_from(["bitframe", "inspect", "frames.txt"])
            .expect("inspect args should parse");
        assert!(matches!(cli.command, Command::Inspect(_)));
    }
}

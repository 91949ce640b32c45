mod cmd;
mod exit;
mod logging;
mod output;

use clap::Parser;

use crate::cmd::Command;
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "netorder", version, about = "Big-endian scalar encoding CLI")]
struct Cli {
    /// Output format.
    #[arg(long, value_name = "FORMAT", env = "NETORDER_FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum level for netorder log events (stderr).
    #[arg(
        long,
        value_name = "LEVEL",
        default_value = "warn",
        env = "NETORDER_LOG_LEVEL",
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
    use super::*;
    use crate::cmd::ScalarType;

    #[test]
    fn parses_encode_subcommand() {
        let cli = Cli::try_parse_from(["netorder", "encode", "--type", "u32", "0x01020304", "7"])
            .expect("encode args should parse");

        match cli.command {
            Command::Encode(args) => {
                assert_eq!(args.ty, ScalarType::U32);
                assert_eq!(args.values, vec!["0x01020304", "7"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn encode_accepts_negative_values() {
        let cli = Cli::try_parse_from(["netorder", "encode", "-t", "i16", "-5", "12"])
            .expect("negative values should parse");
        assert!(matches!(cli.command, Command::Encode(_)));
    }

    #[test]
    fn rejects_unsupported_type() {
        let err = Cli::try_parse_from(["netorder", "encode", "--type", "u64", "1"])
            .expect_err("u64 is not a supported width");
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn rejects_conflicting_decode_inputs() {
        let err = Cli::try_parse_from([
            "netorder", "decode", "--type", "u16", "--hex", "abcd", "--file", "x.bin",
        ])
        .expect_err("conflicting args should fail");

        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn decode_requires_input() {
        let err = Cli::try_parse_from(["netorder", "decode", "--type", "u16"])
            .expect_err("missing input should fail");
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }
}

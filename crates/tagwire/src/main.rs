mod cmd;
mod convert;
mod exit;
mod logging;
mod output;

use clap::Parser;

use crate::cmd::{CodecArgs, Command};
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "tagwire", version, about = "Type-directed binary codec CLI")]
struct Cli {
    /// Output format.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(
        long,
        value_name = "LEVEL",
        default_value = "warn",
        env = "TAGWIRE_LOG_LEVEL",
        global = true
    )]
    log_level: LogLevel,

    #[command(flatten)]
    codec: CodecArgs,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    let result = cmd::run(cli.command, &cli.codec, format);

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
    use tagwire_codec::{IntWidth, PrecisionPolicy};

    #[test]
    fn parses_encode_subcommand() {
        let cli = Cli::try_parse_from(["tagwire", "encode", "--json", "{\"a\":1}"])
            .expect("encode args should parse");
        assert!(matches!(cli.command, Command::Encode(_)));
    }

    #[test]
    fn rejects_conflicting_input_args() {
        let err = Cli::try_parse_from([
            "tagwire",
            "encode",
            "--json",
            "1",
            "--file",
            "/tmp/value.json",
        ])
        .expect_err("conflicting args should fail");

        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn rejects_tag_with_shape() {
        let err = Cli::try_parse_from([
            "tagwire", "decode", "01", "--tag", "boolean", "--shape", "\"boolean\"",
        ])
        .expect_err("conflicting args should fail");
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn codec_flags_build_config() {
        let cli = Cli::try_parse_from([
            "tagwire",
            "decode",
            "01",
            "--tag",
            "boolean",
            "--bigint-width",
            "128",
            "--strict-precision",
            "--max-depth",
            "8",
        ])
        .expect("decode args should parse");

        let config = cli.codec.to_config();
        assert_eq!(config.bigint_width, IntWidth::W128);
        assert_eq!(config.precision, PrecisionPolicy::Reject);
        assert_eq!(config.max_depth, 8);
        assert!(!config.strict_kinds);
    }
}

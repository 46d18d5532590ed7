use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;

use tagwire_codec::{CodecConfig, IntWidth, PrecisionPolicy};

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod decode;
pub mod encode;
pub mod inspect;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode a JSON value and print the bytes.
    Encode(EncodeArgs),
    /// Decode hex bytes with a type tag or shape.
    Decode(DecodeArgs),
    /// List the framed elements of a composite buffer.
    Inspect(InspectArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, codec: &CodecArgs, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Encode(args) => encode::run(args, codec, format),
        Command::Decode(args) => decode::run(args, codec, format),
        Command::Inspect(args) => inspect::run(args, codec, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum WidthArg {
    #[value(name = "32")]
    W32,
    #[value(name = "64")]
    W64,
    #[value(name = "128")]
    W128,
}

impl From<WidthArg> for IntWidth {
    fn from(width: WidthArg) -> Self {
        match width {
            WidthArg::W32 => IntWidth::W32,
            WidthArg::W64 => IntWidth::W64,
            WidthArg::W128 => IntWidth::W128,
        }
    }
}

/// Codec settings shared by all subcommands.
#[derive(Args, Debug)]
pub struct CodecArgs {
    /// Bit width for big integers.
    #[arg(long, value_name = "BITS", default_value = "64", global = true)]
    pub bigint_width: WidthArg,
    /// Fail instead of truncating integers that exceed their width.
    #[arg(long, global = true)]
    pub strict_precision: bool,
    /// Fail on values with no codec (null, floats) instead of encoding their text.
    #[arg(long, global = true)]
    pub strict_kinds: bool,
    /// Maximum composite nesting depth.
    #[arg(long, value_name = "N", default_value_t = tagwire_codec::DEFAULT_MAX_DEPTH, global = true)]
    pub max_depth: usize,
}

impl CodecArgs {
    pub fn to_config(&self) -> CodecConfig {
        CodecConfig {
            max_depth: self.max_depth,
            bigint_width: self.bigint_width.into(),
            precision: if self.strict_precision {
                PrecisionPolicy::Reject
            } else {
                PrecisionPolicy::Truncate
            },
            strict_kinds: self.strict_kinds,
            ..CodecConfig::default()
        }
    }
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// JSON value to encode.
    #[arg(long, conflicts_with = "file")]
    pub json: Option<String>,
    /// Read the JSON value from a file.
    #[arg(long, conflicts_with = "json")]
    pub file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Hex-encoded buffer.
    pub hex: String,
    /// Type tag name (boolean, bigint, number, object, char, string, bytes).
    #[arg(long, short = 't', conflicts_with_all = ["code", "shape"])]
    pub tag: Option<String>,
    /// Numeric tag code; unknown codes report "unsupported".
    #[arg(long, conflicts_with_all = ["tag", "shape"])]
    pub code: Option<u8>,
    /// JSON shape describing composite members.
    #[arg(long, conflicts_with_all = ["tag", "code"])]
    pub shape: Option<String>,
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Hex-encoded composite buffer.
    pub hex: String,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

pub(crate) fn parse_hex(input: &str) -> CliResult<Vec<u8>> {
    let trimmed: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let trimmed = trimmed.strip_prefix("0x").unwrap_or(&trimmed);
    hex::decode(trimmed).map_err(|err| crate::exit::CliError::usage(format!("invalid hex: {err}")))
}

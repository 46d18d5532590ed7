use std::fs;

use tagwire_codec::Codec;

use crate::cmd::{CodecArgs, EncodeArgs};
use crate::convert::value_from_json;
use crate::exit::{codec_error, io_error, CliError, CliResult, SUCCESS, USAGE};
use crate::output::{print_encoded, OutputFormat};

pub fn run(args: EncodeArgs, codec: &CodecArgs, format: OutputFormat) -> CliResult<i32> {
    let input = resolve_input(&args)?;
    let json: serde_json::Value = serde_json::from_str(&input)
        .map_err(|err| CliError::new(USAGE, format!("input is not valid JSON: {err}")))?;
    let value = value_from_json(json)?;

    let encoded = Codec::with_config(codec.to_config())
        .encode(&value)
        .map_err(|err| codec_error("encode failed", err))?;
    tracing::debug!(kind = %value.kind(), len = encoded.len(), "encoded value");

    print_encoded(value.kind(), &encoded, format);
    Ok(SUCCESS)
}

fn resolve_input(args: &EncodeArgs) -> CliResult<String> {
    if let Some(json) = &args.json {
        return Ok(json.clone());
    }
    if let Some(path) = &args.file {
        return fs::read_to_string(path)
            .map_err(|err| io_error(&format!("failed reading {}", path.display()), err));
    }
    Err(CliError::usage("one of --json or --file is required"))
}

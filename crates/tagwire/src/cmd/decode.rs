use tagwire_codec::{tag_name, Codec, Decoded, TypeTag};

use crate::cmd::{parse_hex, CodecArgs, DecodeArgs};
use crate::convert::shape_from_json;
use crate::exit::{codec_error, CliError, CliResult, DATA_INVALID, SUCCESS, USAGE};
use crate::output::{print_decoded, OutputFormat};

pub fn run(args: DecodeArgs, codec: &CodecArgs, format: OutputFormat) -> CliResult<i32> {
    let src = parse_hex(&args.hex)?;
    let codec = Codec::with_config(codec.to_config());

    if let Some(shape) = &args.shape {
        let json: serde_json::Value = serde_json::from_str(shape)
            .map_err(|err| CliError::new(USAGE, format!("--shape is not valid JSON: {err}")))?;
        let shape = shape_from_json(&json)?;
        let value = codec
            .decode_shape(&src, &shape)
            .map_err(|err| codec_error("decode failed", err))?;
        print_decoded("SHAPE", &value, format);
        return Ok(SUCCESS);
    }

    let code = match (&args.tag, args.code) {
        (Some(name), _) => name
            .parse::<TypeTag>()
            .map_err(|err| CliError::usage(err.to_string()))?
            .code(),
        (None, Some(code)) => code,
        (None, None) => return Err(CliError::usage("one of --tag, --code or --shape is required")),
    };

    match codec
        .decode_code(&src, code)
        .map_err(|err| codec_error("decode failed", err))?
    {
        Decoded::Value(value) => {
            print_decoded(tag_name(code), &value, format);
            Ok(SUCCESS)
        }
        Decoded::Unsupported { code } => Err(CliError::new(
            DATA_INVALID,
            format!("unsupported tag code {code}"),
        )),
    }
}

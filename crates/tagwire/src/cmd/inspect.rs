use bytes::Bytes;
use tagwire_frame::split_sequence;

use crate::cmd::{parse_hex, CodecArgs, InspectArgs};
use crate::exit::{frame_error, CliResult, SUCCESS};
use crate::output::{print_elements, OutputFormat};

pub fn run(args: InspectArgs, codec: &CodecArgs, format: OutputFormat) -> CliResult<i32> {
    let src = Bytes::from(parse_hex(&args.hex)?);
    let elements = split_sequence(&src, &codec.to_config().frame)
        .map_err(|err| frame_error("not a framed sequence", err))?;
    print_elements(&elements, format);
    Ok(SUCCESS)
}

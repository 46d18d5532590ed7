use crate::cmd::VersionArgs;
use crate::exit::{CliResult, SUCCESS};

pub fn run(args: VersionArgs) -> CliResult<i32> {
    if !args.extended {
        println!("tagwire {}", env!("CARGO_PKG_VERSION"));
        return Ok(SUCCESS);
    }

    println!("name: tagwire");
    println!("version: {}", env!("CARGO_PKG_VERSION"));
    println!(
        "target: {}",
        option_env!("TAGWIRE_BUILD_TARGET").unwrap_or("unknown")
    );
    println!("git_hash: {}", option_env!("TAGWIRE_GIT_HASH").unwrap_or("unknown"));
    println!(
        "defaults: bigint_width={}, max_depth={}, precision=truncate",
        tagwire_codec::CodecConfig::default().bigint_width,
        tagwire_codec::DEFAULT_MAX_DEPTH
    );
    println!(
        "frame_limits: max_payload={}, max_elements={}",
        tagwire_frame::DEFAULT_MAX_PAYLOAD,
        tagwire_frame::DEFAULT_MAX_ELEMENTS
    );

    Ok(SUCCESS)
}

use crate::cmd::VersionArgs;
use crate::exit::{CliResult, SUCCESS};

pub fn run(args: VersionArgs) -> CliResult<i32> {
    if !args.extended {
        println!("bitframe {}", env!("CARGO_PKG_VERSION"));
        return Ok(SUCCESS);
    }

    println!("name: bitframe");
    println!("version: {}", env!("CARGO_PKG_VERSION"));
    println!(
        "target: {}",
        option_env!("BITFRAME_BUILD_TARGET").unwrap_or("unknown")
    );
    println!("target_os: {}", std::env::consts::OS);
    println!("target_arch: {}", std::env::consts::ARCH);
    println!("default_chunk_size: {}", bitframe_frame::DEFAULT_CHUNK_SIZE);
    println!(
        "checksum: crc16-ccitt poly={:#06x} init={:#06x}",
        bitframe_frame::CRC_POLY,
        bitframe_frame::CRC_INIT
    );

    Ok(SUCCESS)
}

use bitframe_frame::{FrameConfig, Framer};
use bitframe_text::{create_output, open_input};

use crate::cmd::{writes_stdout, EncodeArgs};
use crate::exit::{frame_error, text_error, CliResult, SUCCESS};
use crate::output::{emit, EncodeReport, OutputFormat};

pub fn run(args: EncodeArgs, format: OutputFormat) -> CliResult<i32> {
    let framer = Framer::new(FrameConfig {
        chunk_size: args.chunk_size,
    })
    .map_err(|err| frame_error("invalid configuration", err))?;

    let data = open_input(&args.input)
        .and_then(|mut reader| reader.read_to_end())
        .map_err(|err| text_error("failed reading", err))?;

    // Encode before touching the output so a rejected input leaves no file behind.
    let encoded = framer
        .encode(&data)
        .map_err(|err| frame_error("encode failed", err))?;

    let mut writer =
        create_output(&args.output).map_err(|err| text_error("failed writing", err))?;
    writer
        .write_bits(&encoded.bits)
        .and_then(|()| writer.flush())
        .map_err(|err| text_error("failed writing", err))?;

    tracing::info!(
        frames = encoded.frames,
        input_bits = data.len(),
        output_bits = encoded.bits.len(),
        "encoded stream"
    );

    let report = EncodeReport {
        report: "encode",
        input: args.input.display().to_string(),
        output: args.output.display().to_string(),
        chunk_size: framer.config().chunk_size,
        frames: encoded.frames,
        input_bits: data.len(),
        output_bits: encoded.bits.len(),
        overhead_bits: encoded.bits.len() - data.len(),
    };
    emit(&report, format, writes_stdout(&args.output));

    Ok(SUCCESS)
}

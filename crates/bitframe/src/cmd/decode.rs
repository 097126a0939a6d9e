use bitframe_frame::{Deframer, FrameError, FrameEvent, StopReason};
use bitframe_text::{create_output, open_input};

use crate::cmd::{writes_stdout, DecodeArgs};
use crate::exit::{frame_error, text_error, CliError, CliResult, DATA_INVALID, SUCCESS};
use crate::output::{emit, DecodeReport, OutputFormat};

pub fn run(args: DecodeArgs, format: OutputFormat) -> CliResult<i32> {
    let mut reader = open_input(&args.input).map_err(|err| text_error("failed reading", err))?;
    let mut writer =
        create_output(&args.output).map_err(|err| text_error("failed writing", err))?;
    let mut deframer = Deframer::new();

    while let Some(bits) = reader
        .read_chunk()
        .map_err(|err| text_error("failed reading", err))?
    {
        for event in deframer.feed(&bits) {
            if let FrameEvent::Verified { data, .. } = event {
                writer
                    .write_bits(&data)
                    .map_err(|err| text_error("failed writing", err))?;
            }
        }
        if deframer.is_aborted() {
            break;
        }
    }
    writer
        .flush()
        .map_err(|err| text_error("failed writing", err))?;

    let frames_ok = deframer.frames_ok();
    let frames_failed = deframer.frames_failed();
    let stop = deframer.finish();

    let report = DecodeReport {
        report: "decode",
        input: args.input.display().to_string(),
        output: args.output.display().to_string(),
        input_bits: reader.bits_read(),
        output_bits: writer.bits_written(),
        frames_ok,
        frames_failed,
        stop: stop.into(),
    };
    emit(&report, format, writes_stdout(&args.output));

    if let StopReason::ShortPayload {
        index,
        offset,
        bits,
    } = stop
    {
        return Err(frame_error(
            "decode aborted",
            FrameError::ShortPayload {
                index,
                offset,
                bits,
            },
        ));
    }
    if args.strict && frames_failed > 0 {
        return Err(CliError::new(
            DATA_INVALID,
            format!("{frames_failed} frame(s) failed checksum verification"),
        ));
    }

    Ok(SUCCESS)
}

use bitframe_frame::Deframer;
use bitframe_text::open_input;

use crate::cmd::InspectArgs;
use crate::exit::{text_error, CliResult, SUCCESS};
use crate::output::{emit, FrameRow, InspectReport, OutputFormat};

pub fn run(args: InspectArgs, format: OutputFormat) -> CliResult<i32> {
    let mut reader = open_input(&args.input).map_err(|err| text_error("failed reading", err))?;
    let mut deframer = Deframer::new();
    let mut frames = Vec::new();

    while let Some(bits) = reader
        .read_chunk()
        .map_err(|err| text_error("failed reading", err))?
    {
        frames.extend(deframer.feed(&bits).iter().map(FrameRow::from));
        if deframer.is_aborted() {
            break;
        }
    }

    let report = InspectReport {
        report: "inspect",
        input: args.input.display().to_string(),
        input_bits: reader.bits_read(),
        frames,
        stop: deframer.finish().into(),
    };
    emit(&report, format, false);

    Ok(SUCCESS)
}

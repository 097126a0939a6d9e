use std::io::IsTerminal;

use bitframe_frame::{FrameEvent, StopReason};
use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

/// A command summary renderable in every [`OutputFormat`].
pub trait Report: Serialize {
    fn table(&self) -> Table;
    fn pretty(&self) -> String;
}

pub fn render<R: Report>(report: &R, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => serde_json::to_string(report).unwrap_or_else(|_| "{}".to_string()),
        OutputFormat::Table => report.table().to_string(),
        OutputFormat::Pretty => report.pretty(),
    }
}

/// Print a report. When stdout carries bit text the report goes to stderr.
pub fn emit<R: Report>(report: &R, format: OutputFormat, stdout_busy: bool) {
    let text = render(report, format);
    if stdout_busy {
        eprintln!("{text}");
    } else {
        println!("{text}");
    }
}

#[derive(Debug, Serialize)]
pub struct EncodeReport {
    pub report: &'static str,
    pub input: String,
    pub output: String,
    pub chunk_size: usize,
    pub frames: usize,
    pub input_bits: usize,
    pub output_bits: usize,
    pub overhead_bits: usize,
}

impl Report for EncodeReport {
    fn table(&self) -> Table {
        summary_table(vec![
            ("input", self.input.clone()),
            ("output", self.output.clone()),
            ("chunk size", self.chunk_size.to_string()),
            ("frames", self.frames.to_string()),
            ("input bits", self.input_bits.to_string()),
            ("output bits", self.output_bits.to_string()),
            ("overhead bits", self.overhead_bits.to_string()),
        ])
    }

    fn pretty(&self) -> String {
        format!(
            "Encoded {} frames. input={} ({} bits) output={} ({} bits) chunk_size={}",
            self.frames,
            self.input,
            self.input_bits,
            self.output,
            self.output_bits,
            self.chunk_size
        )
    }
}

#[derive(Debug, Serialize)]
pub struct DecodeReport {
    pub report: &'static str,
    pub input: String,
    pub output: String,
    pub input_bits: usize,
    pub output_bits: usize,
    pub frames_ok: usize,
    pub frames_failed: usize,
    pub stop: StopOutput,
}

impl Report for DecodeReport {
    fn table(&self) -> Table {
        summary_table(vec![
            ("input", self.input.clone()),
            ("output", self.output.clone()),
            ("input bits", self.input_bits.to_string()),
            ("output bits", self.output_bits.to_string()),
            ("frames ok", self.frames_ok.to_string()),
            ("frames failed", self.frames_failed.to_string()),
            ("stop", self.stop.describe()),
        ])
    }

    fn pretty(&self) -> String {
        format!(
            "Decoded {} frames ({} failed). output={} ({} bits) stop={}",
            self.frames_ok,
            self.frames_failed,
            self.output,
            self.output_bits,
            self.stop.describe()
        )
    }
}

#[derive(Debug, Serialize)]
pub struct InspectReport {
    pub report: &'static str,
    pub input: String,
    pub input_bits: usize,
    pub frames: Vec<FrameRow>,
    pub stop: StopOutput,
}

impl Report for InspectReport {
    fn table(&self) -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                "FRAME", "OFFSET", "STATUS", "DATA BITS", "RECEIVED", "COMPUTED",
            ]);
        for row in &self.frames {
            table.add_row(vec![
                row.index.to_string(),
                row.offset.to_string(),
                row.status.label().to_string(),
                row.data_bits.to_string(),
                row.received_crc.clone().unwrap_or_default(),
                row.computed_crc.clone().unwrap_or_default(),
            ]);
        }
        table.add_row(vec![
            "-".to_string(),
            self.stop.offset.map(|o| o.to_string()).unwrap_or_default(),
            self.stop.describe(),
            String::new(),
            String::new(),
            String::new(),
        ]);
        table
    }

    fn pretty(&self) -> String {
        let mut lines: Vec<String> = self
            .frames
            .iter()
            .map(|row| {
                let mut line = format!(
                    "frame={} offset={} status={} data_bits={}",
                    row.index,
                    row.offset,
                    row.status.label(),
                    row.data_bits
                );
                if let (Some(received), Some(computed)) = (&row.received_crc, &row.computed_crc) {
                    line.push_str(&format!(" received={received} computed={computed}"));
                }
                line
            })
            .collect();
        lines.push(format!("stop={}", self.stop.describe()));
        lines.join("\n")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FrameStatus {
    Verified,
    ChecksumMismatch,
    TooShort,
}

impl FrameStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Verified => "verified",
            Self::ChecksumMismatch => "checksum-mismatch",
            Self::TooShort => "too-short",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FrameRow {
    pub index: usize,
    pub offset: usize,
    pub status: FrameStatus,
    /// Data bits carried (verified), or payload bits after destuffing (too short).
    pub data_bits: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received_crc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub computed_crc: Option<String>,
}

impl From<&FrameEvent> for FrameRow {
    fn from(event: &FrameEvent) -> Self {
        let (status, data_bits, received_crc, computed_crc) = match event {
            FrameEvent::Verified { data, .. } => (FrameStatus::Verified, data.len(), None, None),
            FrameEvent::ChecksumMismatch {
                received, computed, ..
            } => (
                FrameStatus::ChecksumMismatch,
                0,
                Some(hex16(*received)),
                Some(hex16(*computed)),
            ),
            FrameEvent::TooShort { bits, .. } => (FrameStatus::TooShort, *bits, None, None),
        };
        Self {
            index: event.index(),
            offset: event.offset(),
            status,
            data_bits,
            received_crc,
            computed_crc,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StopOutput {
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bits: Option<usize>,
}

impl StopOutput {
    pub fn describe(&self) -> String {
        match (self.kind, self.index, self.offset, self.bits) {
            ("unterminated", _, Some(offset), Some(bits)) => {
                format!("unterminated frame at bit {offset} ({bits} bits discarded)")
            }
            ("short-payload", Some(index), Some(offset), Some(bits)) => {
                format!("aborted: frame {index} at bit {offset} too short ({bits} bits)")
            }
            (kind, ..) => kind.to_string(),
        }
    }
}

impl From<StopReason> for StopOutput {
    fn from(stop: StopReason) -> Self {
        match stop {
            StopReason::EndOfStream => Self {
                kind: "end-of-stream",
                index: None,
                offset: None,
                bits: None,
            },
            StopReason::Unterminated {
                offset,
                discarded_bits,
            } => Self {
                kind: "unterminated",
                index: None,
                offset: Some(offset),
                bits: Some(discarded_bits),
            },
            StopReason::ShortPayload {
                index,
                offset,
                bits,
            } => Self {
                kind: "short-payload",
                index: Some(index),
                offset: Some(offset),
                bits: Some(bits),
            },
        }
    }
}

fn summary_table(rows: Vec<(&str, String)>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["FIELD", "VALUE"]);
    for (field, value) in rows {
        table.add_row(vec![field.to_string(), value]);
    }
    table
}

fn hex16(value: u16) -> String {
    format!("{value:#06x}")
}

use crate::bits::{read_u16_msb, BitSeq, FLAG_LEN};
use crate::crc::{crc16, CRC_BITS};
use crate::error::{FrameError, Result};
use crate::stuff::destuff;

/// [`FLAG`](crate::FLAG) as it appears in the shift register, first bit in the MSB.
const FLAG_PATTERN: u8 = 0b0111_1110;

/// Outcome of one flag-delimited frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameEvent {
    /// The checksum matched; `data` is the recovered chunk.
    Verified {
        index: usize,
        offset: usize,
        data: BitSeq,
    },
    /// The checksum did not match. The frame's data is dropped.
    ChecksumMismatch {
        index: usize,
        offset: usize,
        received: u16,
        computed: u16,
    },
    /// The destuffed payload had fewer than 16 bits. Decoding stops here.
    TooShort {
        index: usize,
        offset: usize,
        bits: usize,
    },
}

impl FrameEvent {
    /// 0-based ordinal of the frame among all flag-delimited frames seen.
    pub fn index(&self) -> usize {
        match self {
            Self::Verified { index, .. }
            | Self::ChecksumMismatch { index, .. }
            | Self::TooShort { index, .. } => *index,
        }
    }

    /// Bit offset of the frame's opening flag in the input stream.
    pub fn offset(&self) -> usize {
        match self {
            Self::Verified { offset, .. }
            | Self::ChecksumMismatch { offset, .. }
            | Self::TooShort { offset, .. } => *offset,
        }
    }
}

/// Why decoding stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Input ran out while searching for an opening flag.
    EndOfStream,
    /// An opening flag was found but no closing flag followed. The bits after
    /// the opening flag were discarded.
    Unterminated { offset: usize, discarded_bits: usize },
    /// A frame was too short to carry a checksum; the rest of the stream was
    /// ignored.
    ShortPayload {
        index: usize,
        offset: usize,
        bits: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Hunting,
    InFrame {
        offset: usize,
    },
    Aborted {
        index: usize,
        offset: usize,
        bits: usize,
    },
}

/// Incremental frame decoder.
///
/// Bits are pushed one at a time; only the bits since the last opening flag
/// are retained. Flags are searched on every bit position, with no byte
/// alignment. After a closing flag the search restarts on the bit right after
/// it, so a closing flag never doubles as the next opening flag.
#[derive(Debug, Clone)]
pub struct Deframer {
    state: State,
    window: u8,
    window_len: usize,
    position: usize,
    raw: BitSeq,
    frames_seen: usize,
    frames_ok: usize,
    frames_failed: usize,
}

impl Default for Deframer {
    fn default() -> Self {
        Self::new()
    }
}

impl Deframer {
    /// Create a deframer that is hunting for an opening flag.
    pub fn new() -> Self {
        Self {
            state: State::Hunting,
            window: 0,
            window_len: 0,
            position: 0,
            raw: BitSeq::new(),
            frames_seen: 0,
            frames_ok: 0,
            frames_failed: 0,
        }
    }

    /// Push one bit. Returns an event when the bit completes a closing flag.
    ///
    /// Once a [`FrameEvent::TooShort`] has been returned every further bit is
    /// ignored.
    pub fn push(&mut self, bit: bool) -> Option<FrameEvent> {
        let pos = self.position;
        self.position += 1;

        if matches!(self.state, State::Aborted { .. }) {
            return None;
        }

        self.window = (self.window << 1) | u8::from(bit);
        self.window_len = (self.window_len + 1).min(FLAG_LEN);
        let at_flag = self.window_len == FLAG_LEN && self.window == FLAG_PATTERN;

        match self.state {
            State::Hunting => {
                if at_flag {
                    let offset = pos + 1 - FLAG_LEN;
                    tracing::trace!(offset, "opening flag");
                    self.state = State::InFrame { offset };
                    self.raw.clear();
                    self.reset_window();
                }
                None
            }
            State::InFrame { offset } => {
                self.raw.push(bit);
                if !at_flag {
                    return None;
                }
                self.raw.truncate(self.raw.len() - FLAG_LEN);
                self.reset_window();
                Some(self.close_frame(offset))
            }
            State::Aborted { .. } => None,
        }
    }

    /// Push a slice of bits and collect the resulting events.
    pub fn feed(&mut self, bits: &[bool]) -> Vec<FrameEvent> {
        bits.iter().filter_map(|&bit| self.push(bit)).collect()
    }

    /// Signal end of input and report why decoding stopped.
    pub fn finish(self) -> StopReason {
        match self.state {
            State::Hunting => StopReason::EndOfStream,
            State::InFrame { offset } => {
                tracing::warn!(
                    offset,
                    discarded_bits = self.raw.len(),
                    "no closing flag, discarding unterminated frame"
                );
                StopReason::Unterminated {
                    offset,
                    discarded_bits: self.raw.len(),
                }
            }
            State::Aborted {
                index,
                offset,
                bits,
            } => StopReason::ShortPayload {
                index,
                offset,
                bits,
            },
        }
    }

    /// Frames whose checksum matched so far.
    pub fn frames_ok(&self) -> usize {
        self.frames_ok
    }

    /// Frames whose checksum did not match so far.
    pub fn frames_failed(&self) -> usize {
        self.frames_failed
    }

    /// Number of bits pushed so far.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns true once a too-short frame stopped decoding.
    pub fn is_aborted(&self) -> bool {
        matches!(self.state, State::Aborted { .. })
    }

    /// Returns true while between an opening flag and its closing flag.
    pub fn in_frame(&self) -> bool {
        matches!(self.state, State::InFrame { .. })
    }

    fn reset_window(&mut self) {
        self.window = 0;
        self.window_len = 0;
    }

    fn close_frame(&mut self, offset: usize) -> FrameEvent {
        let index = self.frames_seen;
        self.frames_seen += 1;

        let mut payload = destuff(&self.raw);
        self.raw.clear();

        let Some((received, computed)) = payload
            .split_last_chunk::<CRC_BITS>()
            .map(|(data, crc_bits)| (read_u16_msb(crc_bits), crc16(data)))
        else {
            tracing::error!(
                frame = index,
                offset,
                bits = payload.len(),
                "frame too short for checksum, stopping"
            );
            self.state = State::Aborted {
                index,
                offset,
                bits: payload.len(),
            };
            return FrameEvent::TooShort {
                index,
                offset,
                bits: payload.len(),
            };
        };
        self.state = State::Hunting;
        payload.truncate(payload.len() - CRC_BITS);

        if received != computed {
            self.frames_failed += 1;
            tracing::warn!(
                frame = index,
                offset,
                received,
                computed,
                "checksum mismatch"
            );
            return FrameEvent::ChecksumMismatch {
                index,
                offset,
                received,
                computed,
            };
        }

        self.frames_ok += 1;
        tracing::debug!(frame = index, offset, data_bits = payload.len(), "frame verified");
        FrameEvent::Verified {
            index,
            offset,
            data: payload,
        }
    }
}

/// Result of decoding a whole bit stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// Data of every verified frame, in stream order.
    pub data: BitSeq,
    /// Frames whose checksum matched.
    pub frames_ok: usize,
    /// Frames whose checksum did not match.
    pub frames_failed: usize,
    /// Why decoding stopped.
    pub stop: StopReason,
}

impl Decoded {
    /// Returns true if a too-short frame aborted the decode.
    pub fn is_aborted(&self) -> bool {
        matches!(self.stop, StopReason::ShortPayload { .. })
    }

    /// Turn an aborted decode into `Err(FrameError::ShortPayload)`.
    pub fn into_result(self) -> Result<Self> {
        match self.stop {
            StopReason::ShortPayload {
                index,
                offset,
                bits,
            } => Err(FrameError::ShortPayload {
                index,
                offset,
                bits,
            }),
            _ => Ok(self),
        }
    }
}

/// Decode a complete bit stream.
///
/// Garbage between frames is skipped. Frames failing their checksum are
/// counted and dropped. A missing closing flag or a too-short frame stops
/// decoding, keeping everything verified before it.
pub fn decode(bits: &[bool]) -> Decoded {
    let mut deframer = Deframer::new();
    let mut data = BitSeq::new();

    for &bit in bits {
        if let Some(FrameEvent::Verified { data: chunk, .. }) = deframer.push(bit) {
            data.extend_from_bits(&chunk);
        }
        if deframer.is_aborted() {
            break;
        }
    }

    let frames_ok = deframer.frames_ok();
    let frames_failed = deframer.frames_failed();
    let stop = deframer.finish();

    tracing::debug!(
        input_bits = bits.len(),
        output_bits = data.len(),
        frames_ok,
        frames_failed,
        ?stop,
        "decoded stream"
    );

    Decoded {
        data,
        frames_ok,
        frames_failed,
        stop,
    }
}

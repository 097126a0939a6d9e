use crate::bits::{BitSeq, FLAG, FLAG_LEN};
use crate::crc::{crc16, CRC_BITS};
use crate::error::{FrameError, Result};
use crate::stuff::stuff;

/// Default number of data bits carried by one frame.
pub const DEFAULT_CHUNK_SIZE: usize = 80;

/// Configuration for the frame encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameConfig {
    /// Data bits per frame. The final frame may carry fewer. Default: 80.
    pub chunk_size: usize,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

/// Result of encoding a whole bit stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    /// Concatenated frames, in chunk order.
    pub bits: BitSeq,
    /// Number of frames emitted (one per chunk).
    pub frames: usize,
}

/// Encode one chunk into a complete frame and append it to `dst`.
///
/// Wire format:
/// ```text
/// ┌──────────┬──────────────────────────────────┬──────────┐
/// │ Flag     │ stuff(chunk ++ crc16(chunk))     │ Flag     │
/// │ 01111110 │ CRC 16 bits, MSB first           │ 01111110 │
/// └──────────┴──────────────────────────────────┴──────────┘
/// ```
///
/// The checksum covers the raw chunk bits only, before stuffing.
pub fn encode_frame(chunk: &[bool], dst: &mut BitSeq) {
    let crc = crc16(chunk);

    let mut body = BitSeq::with_capacity(chunk.len() + CRC_BITS);
    body.extend_from_bits(chunk);
    body.push_u16_msb(crc);
    let stuffed = stuff(&body);

    dst.extend_from_bits(&FLAG);
    dst.extend_from_bits(&stuffed);
    dst.extend_from_bits(&FLAG);

    tracing::debug!(
        data_bits = chunk.len(),
        stuffed_bits = stuffed.len(),
        crc,
        "encoded frame"
    );
}

/// Splits a bit stream into chunks and frames each one.
#[derive(Debug, Clone)]
pub struct Framer {
    config: FrameConfig,
}

impl Framer {
    /// Create a framer, rejecting a zero chunk size.
    pub fn new(config: FrameConfig) -> Result<Self> {
        if config.chunk_size == 0 {
            return Err(FrameError::InvalidChunkSize(config.chunk_size));
        }
        Ok(Self { config })
    }

    /// Encode `bits` into consecutive frames.
    ///
    /// Returns `Err(FrameError::EmptyInput)` if there is nothing to send.
    pub fn encode(&self, bits: &[bool]) -> Result<Encoded> {
        if bits.is_empty() {
            return Err(FrameError::EmptyInput);
        }

        let chunk_size = self.config.chunk_size;
        let frames = bits.len().div_ceil(chunk_size);
        // Sized from the data, never from `chunk_size`, which may be huge.
        // Worst case stuffing adds one bit per five, rounded up per frame.
        let per_frame = CRC_BITS + CRC_BITS / 5 + 1 + 2 * FLAG_LEN;
        let mut out = BitSeq::with_capacity(
            bits.len()
                .saturating_add(bits.len() / 5)
                .saturating_add(frames.saturating_mul(per_frame)),
        );

        for chunk in bits.chunks(chunk_size) {
            encode_frame(chunk, &mut out);
        }

        tracing::debug!(
            input_bits = bits.len(),
            output_bits = out.len(),
            frames,
            chunk_size,
            "encoded stream"
        );

        Ok(Encoded { bits: out, frames })
    }

    /// Current framer configuration.
    pub fn config(&self) -> &FrameConfig {
        &self.config
    }
}

/// Encode `bits` with the given chunk size.
pub fn encode(bits: &[bool], chunk_size: usize) -> Result<Encoded> {
    Framer::new(FrameConfig { chunk_size })?.encode(bits)
}

//! Bit-oriented data-link framing.
//!
//! This is the codec layer of bitframe. An arbitrary bit stream is cut into
//! chunks and every chunk is sent as:
//! - An opening flag `01111110`
//! - The chunk bits followed by their CRC-16-CCITT, bit-stuffed
//! - A closing flag `01111110`
//!
//! Stuffing guarantees that six consecutive 1 bits only ever appear inside a
//! flag, so a receiver can resynchronize on any bit boundary.
//!
//! Everything here is pure: no I/O, no shared state between calls.

pub mod bits;
pub mod codec;
pub mod crc;
pub mod deframer;
pub mod error;
pub mod stuff;

pub use bits::{matches_flag, read_u16_msb, BitSeq, FLAG, FLAG_LEN};
pub use codec::{encode, encode_frame, Encoded, FrameConfig, Framer, DEFAULT_CHUNK_SIZE};
pub use crc::{crc16, CRC_BITS, CRC_INIT, CRC_POLY};
pub use deframer::{decode, Decoded, Deframer, FrameEvent, StopReason};
pub use error::{FrameError, Result};
pub use stuff::{destuff, stuff, MAX_ONES_RUN};

//! Bit-oriented data-link framing.
//!
//! bitframe packages an arbitrary bit stream into flag-delimited,
//! bit-stuffed, CRC-16-CCITT protected frames and recovers it on the other
//! side, resynchronizing on flags after line noise.
//!
//! # Crate Structure
//!
//! - [`frame`]: Codec with checksum, stuffing, framer and deframer
//! - [`text`]: `'0'`/`'1'` bit text readers, writers and file helpers
//!
//! ```
//! use bitframe::frame::{decode, encode};
//! use bitframe::text::parse_bits;
//!
//! let data = parse_bits("1111100000");
//! let encoded = encode(&data, 80).unwrap();
//! assert_eq!(encoded.frames, 1);
//!
//! let decoded = decode(&encoded.bits);
//! assert_eq!(decoded.data, data);
//! assert_eq!(decoded.frames_ok, 1);
//! ```

/// Re-export frame types.
pub mod frame {
    pub use bitframe_frame::*;
}

/// Re-export bit text types.
pub mod text {
    pub use bitframe_text::*;
}

//! ASCII bit text for bitframe.
//!
//! The framing codec works on abstract bit sequences. This crate is the glue
//! to the outside world, where a bit stream is stored as text:
//! - One `'0'` or `'1'` byte per bit
//! - Every other byte (whitespace, newlines, comments) is ignored on input
//! - Output is a single unbroken line of `'0'`/`'1'`
//!
//! The path `-` stands for stdin or stdout.

pub mod ascii;
pub mod error;
pub mod file;
pub mod reader;
pub mod writer;

pub use ascii::{bit_from_ascii, bit_to_ascii, format_bits, parse_bits};
pub use error::{Result, TextError};
pub use file::{create_output, open_input, read_bit_file, write_bit_file, STDIO_PATH};
pub use reader::BitTextReader;
pub use writer::BitTextWriter;

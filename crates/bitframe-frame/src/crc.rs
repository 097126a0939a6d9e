//! Bit-serial CRC-16-CCITT.
//!
//! Frame payloads are not byte-aligned, so the register is clocked once per
//! bit instead of through a byte table.

/// Generator polynomial x^16 + x^12 + x^5 + 1.
pub const CRC_POLY: u16 = 0x1021;

/// Initial register value.
pub const CRC_INIT: u16 = 0xFFFF;

/// Width of the checksum in bits.
pub const CRC_BITS: usize = 16;

/// Compute the CRC-16-CCITT of a bit sequence.
///
/// Every input bit is clocked through the register, followed by sixteen zero
/// bits that flush the tail of the message. An empty input yields the
/// flush-only result `0x1D0F`.
pub fn crc16(bits: &[bool]) -> u16 {
    let crc = bits.iter().fold(CRC_INIT, |crc, &bit| clock(crc, bit));
    (0..CRC_BITS).fold(crc, |crc, _| clock(crc, false))
}

#[inline]
fn clock(crc: u16, bit: bool) -> u16 {
    let msb = crc & 0x8000 != 0;
    let shifted = crc << 1;
    if bit ^ msb {
        shifted ^ CRC_POLY
    } else {
        shifted
    }
}

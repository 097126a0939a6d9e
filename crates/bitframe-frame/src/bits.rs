use std::fmt;
use std::ops::Deref;

/// Flag sequence delimiting every frame: `01111110`.
pub const FLAG: [bool; 8] = [false, true, true, true, true, true, true, false];

/// Length of [`FLAG`] in bits.
pub const FLAG_LEN: usize = FLAG.len();

/// An ordered, owned sequence of bits. Index 0 is the first bit on the wire.
///
/// Slicing goes through `Deref<Target = [bool]>`, so every `&[bool]` API in
/// this crate accepts a `&BitSeq` as well.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BitSeq {
    bits: Vec<bool>,
}

impl BitSeq {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self { bits: Vec::new() }
    }

    /// Create an empty sequence with room for `capacity` bits.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bits: Vec::with_capacity(capacity),
        }
    }

    /// Create a sequence of `len` zero bits.
    pub fn zeros(len: usize) -> Self {
        Self {
            bits: vec![false; len],
        }
    }

    /// Append one bit.
    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    /// Append every bit of `bits` in order.
    pub fn extend_from_bits(&mut self, bits: &[bool]) {
        self.bits.extend_from_slice(bits);
    }

    /// Append the 16 bits of `value`, most significant bit first.
    pub fn push_u16_msb(&mut self, value: u16) {
        for shift in (0..16).rev() {
            self.bits.push((value >> shift) & 1 == 1);
        }
    }

    /// Drop every bit, keeping the allocation.
    pub fn clear(&mut self) {
        self.bits.clear();
    }

    /// Shorten the sequence to `len` bits.
    pub fn truncate(&mut self, len: usize) {
        self.bits.truncate(len);
    }

    /// Borrow the bits as a slice.
    pub fn as_bits(&self) -> &[bool] {
        &self.bits
    }

    /// Consume the sequence and return the backing vector.
    pub fn into_vec(self) -> Vec<bool> {
        self.bits
    }
}

impl Deref for BitSeq {
    type Target = [bool];

    fn deref(&self) -> &[bool] {
        &self.bits
    }
}

impl AsRef<[bool]> for BitSeq {
    fn as_ref(&self) -> &[bool] {
        &self.bits
    }
}

impl From<Vec<bool>> for BitSeq {
    fn from(bits: Vec<bool>) -> Self {
        Self { bits }
    }
}

impl From<&[bool]> for BitSeq {
    fn from(bits: &[bool]) -> Self {
        Self {
            bits: bits.to_vec(),
        }
    }
}

impl FromIterator<bool> for BitSeq {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

impl Extend<bool> for BitSeq {
    fn extend<I: IntoIterator<Item = bool>>(&mut self, iter: I) {
        self.bits.extend(iter);
    }
}

impl IntoIterator for BitSeq {
    type Item = bool;
    type IntoIter = std::vec::IntoIter<bool>;

    fn into_iter(self) -> Self::IntoIter {
        self.bits.into_iter()
    }
}

impl<'a> IntoIterator for &'a BitSeq {
    type Item = &'a bool;
    type IntoIter = std::slice::Iter<'a, bool>;

    fn into_iter(self) -> Self::IntoIter {
        self.bits.iter()
    }
}

/// Renders one `'0'` or `'1'` per bit.
impl fmt::Display for BitSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Read 16 bits as an integer, first bit most significant.
pub fn read_u16_msb(bits: &[bool; 16]) -> u16 {
    bits.iter().fold(0u16, |acc, &bit| (acc << 1) | u16::from(bit))
}

/// Returns true if the [`FLAG`] pattern starts at `pos`.
pub fn matches_flag(bits: &[bool], pos: usize) -> bool {
    match pos.checked_add(FLAG_LEN) {
        Some(end) if end <= bits.len() => bits[pos..end] == FLAG,
        _ => false,
    }
}

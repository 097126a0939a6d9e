use std::io::{ErrorKind, Read};

use bitframe_frame::BitSeq;

use crate::ascii::bit_from_ascii;
use crate::error::{Result, TextError};

const READ_CHUNK_SIZE: usize = 8 * 1024;

/// Reads bits from `'0'`/`'1'` text on any `Read` stream.
///
/// Bytes that are not `'0'` or `'1'` are skipped, so line breaks and spacing
/// in the source are harmless.
pub struct BitTextReader<T> {
    inner: T,
    bits_read: usize,
    eof: bool,
}

impl<T: Read> BitTextReader<T> {
    /// Create a new bit text reader.
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            bits_read: 0,
            eof: false,
        }
    }

    /// Read the next non-empty run of bits (blocking).
    ///
    /// Returns `Ok(None)` once the stream is exhausted.
    pub fn read_chunk(&mut self) -> Result<Option<BitSeq>> {
        let mut chunk = [0u8; READ_CHUNK_SIZE];
        loop {
            if self.eof {
                return Ok(None);
            }

            let read = match self.inner.read(&mut chunk) {
                Ok(n) => n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(TextError::Io(err)),
            };

            if read == 0 {
                self.eof = true;
                tracing::trace!(bits_read = self.bits_read, "bit text exhausted");
                return Ok(None);
            }

            let bits: BitSeq = chunk[..read]
                .iter()
                .filter_map(|&byte| bit_from_ascii(byte))
                .collect();
            if bits.is_empty() {
                continue;
            }

            self.bits_read += bits.len();
            return Ok(Some(bits));
        }
    }

    /// Read every remaining bit.
    pub fn read_to_end(&mut self) -> Result<BitSeq> {
        let mut all = BitSeq::new();
        while let Some(bits) = self.read_chunk()? {
            all.extend_from_bits(&bits);
        }
        Ok(all)
    }

    /// Total bits returned so far.
    pub fn bits_read(&self) -> usize {
        self.bits_read
    }

    /// Borrow the underlying stream.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Mutably borrow the underlying stream.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Consume the reader and return the inner stream.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn read_all_bits() {
        let mut reader = BitTextReader::new(Cursor::new(b"0111 1110\n01".to_vec()));
        let bits = reader.read_to_end().unwrap();

        assert_eq!(bits.to_string(), "0111111001");
        assert_eq!(reader.bits_read(), 10);
    }

    #[test]
    fn empty_stream() {
        let mut reader = BitTextReader::new(Cursor::new(Vec::<u8>::new()));
        assert!(reader.read_chunk().unwrap().is_none());
        assert!(reader.read_to_end().unwrap().is_empty());
    }

    #[test]
    fn noise_only_stream() {
        let mut reader = BitTextReader::new(Cursor::new(b"\n\n  # nothing here\n".to_vec()));
        assert!(reader.read_chunk().unwrap().is_none());
        assert_eq!(reader.bits_read(), 0);
    }

    #[test]
    fn large_input_spans_chunks() {
        let text: Vec<u8> = (0..3 * READ_CHUNK_SIZE + 5)
            .map(|i| if i % 3 == 0 { b'1' } else { b'0' })
            .collect();
        let mut reader = BitTextReader::new(Cursor::new(text.clone()));
        let bits = reader.read_to_end().unwrap();

        assert_eq!(bits.len(), text.len());
        assert!(bits[0]);
        assert!(!bits[1]);
    }

    #[derive(Debug)]
    struct ByteByByteReader {
        bytes: Vec<u8>,
        pos: usize,
    }

    impl Read for ByteByByteReader {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if self.pos >= self.bytes.len() || buf.is_empty() {
                return Ok(0);
            }
            buf[0] = self.bytes[self.pos];
            self.pos += 1;
            Ok(1)
        }
    }

    #[test]
    fn partial_read_handling() {
        let slow = ByteByByteReader {
            bytes: b"1 0 1 1".to_vec(),
            pos: 0,
        };
        let mut reader = BitTextReader::new(slow);

        let first = reader.read_chunk().unwrap().unwrap();
        assert_eq!(first.as_bits(), &[true]);
        // The space after it is skipped, not returned as an empty chunk.
        let second = reader.read_chunk().unwrap().unwrap();
        assert_eq!(second.as_bits(), &[false]);
        assert_eq!(reader.read_to_end().unwrap().to_string(), "11");
    }

    struct InterruptedThenData {
        interrupted: bool,
        inner: Cursor<Vec<u8>>,
    }

    impl Read for InterruptedThenData {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if !self.interrupted {
                self.interrupted = true;
                return Err(std::io::Error::from(ErrorKind::Interrupted));
            }
            self.inner.read(buf)
        }
    }

    #[test]
    fn interrupted_read_retries() {
        let mut reader = BitTextReader::new(InterruptedThenData {
            interrupted: false,
            inner: Cursor::new(b"101".to_vec()),
        });
        assert_eq!(reader.read_to_end().unwrap().to_string(), "101");
    }

    struct BrokenReader;

    impl Read for BrokenReader {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::from(ErrorKind::BrokenPipe))
        }
    }

    #[test]
    fn read_error_propagates() {
        let mut reader = BitTextReader::new(BrokenReader);
        let err = reader.read_chunk().unwrap_err();
        assert!(matches!(err, TextError::Io(e) if e.kind() == ErrorKind::BrokenPipe));
    }

    #[test]
    fn accessors_and_into_inner() {
        let mut reader = BitTextReader::new(Cursor::new(b"1".to_vec()));
        let _ = reader.get_ref();
        let _ = reader.get_mut();
        let inner = reader.into_inner();
        assert_eq!(inner.get_ref().as_slice(), b"1");
    }
}

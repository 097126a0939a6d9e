use std::io::{ErrorKind, Write};

use bytes::{BufMut, BytesMut};

use crate::ascii::bit_to_ascii;
use crate::error::{Result, TextError};

const INITIAL_BUFFER_CAPACITY: usize = 8 * 1024;

/// Writes bits as `'0'`/`'1'` text to any `Write` stream.
///
/// Writes are not flushed automatically; call [`flush`](Self::flush) when done.
pub struct BitTextWriter<T> {
    inner: T,
    buf: BytesMut,
    bits_written: usize,
}

impl<T: Write> BitTextWriter<T> {
    /// Create a new bit text writer.
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            buf: BytesMut::with_capacity(INITIAL_BUFFER_CAPACITY),
            bits_written: 0,
        }
    }

    /// Write every bit of `bits` (blocking).
    pub fn write_bits(&mut self, bits: &[bool]) -> Result<()> {
        self.buf.clear();
        self.buf.reserve(bits.len());
        for &bit in bits {
            self.buf.put_u8(bit_to_ascii(bit));
        }

        let mut offset = 0usize;
        while offset < self.buf.len() {
            match self.inner.write(&self.buf[offset..]) {
                Ok(0) => {
                    return Err(TextError::Io(std::io::Error::from(ErrorKind::WriteZero)));
                }
                Ok(n) => offset += n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) if err.kind() == ErrorKind::WouldBlock => continue,
                Err(err) => return Err(TextError::Io(err)),
            }
        }

        self.bits_written += bits.len();
        Ok(())
    }

    /// Flush the underlying stream.
    pub fn flush(&mut self) -> Result<()> {
        loop {
            match self.inner.flush() {
                Ok(()) => return Ok(()),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) if err.kind() == ErrorKind::WouldBlock => continue,
                Err(err) => return Err(TextError::Io(err)),
            }
        }
    }

    /// Total bits written so far.
    pub fn bits_written(&self) -> usize {
        self.bits_written
    }

    /// Borrow the underlying stream.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Mutably borrow the underlying stream.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Consume the writer and return the inner stream.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

use std::convert::Infallible;
use std::io::{self, Read};

use crate::error::HashError;

/// Where the padder pulls message bytes from. A source hands out at most ``buf.len()`` bytes per
/// call and returns 0 once it is exhausted. Errors abort the digest computation; whether a
/// transient failure is retried is up to the source itself.
pub trait ByteSource {
    type Error: Into<HashError>;

    /// Read up to ``buf.len()`` bytes into ``buf`` and return how many were written.
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;

    /// Whether the source knows that the next read will return 0. Sources that cannot tell
    /// report `false`; the padder then learns about the end through an empty read.
    fn is_exhausted(&self) -> bool {
        false
    }
}

/// A message already held in memory. Reading never fails.
impl<'a> ByteSource for &'a [u8] {
    type Error = Infallible;

    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let data: &'a [u8] = *self;
        let count = buf.len().min(data.len());
        let (head, tail) = data.split_at(count);
        buf[..count].copy_from_slice(head);
        *self = tail;
        Ok(count)
    }

    fn is_exhausted(&self) -> bool {
        self.is_empty()
    }
}

/// Adapts any [`Read`] implementation, such as a file or a socket, into a byte source.
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        ReaderSource { reader }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> ByteSource for ReaderSource<R> {
    type Error = io::Error;

    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        self.reader.read(buf)
    }
}

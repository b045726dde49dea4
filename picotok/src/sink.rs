// SPDX-License-Identifier: Apache-2.0

//! Output sinks for payload extraction.
//!
//! [`Scanner::read_number`](crate::Scanner::read_number) and
//! [`Scanner::read_string`](crate::Scanner::read_string) stream payload bytes
//! straight out of the scanner buffer into a [`Writer`]. A few stock sinks
//! live here:
//!
//! - [`Discard`] drops everything and only counts, for skipping values
//! - [`SliceWriter`] fills a fixed byte slice, for `no_std` callers
//! - [`ChunkWriter`] caps how much another writer receives per call
//!
//! With the `std` feature, [`IoWriter`](crate::IoWriter) adapts any
//! `std::io::Write`.

/// Trait for output sinks receiving payload bytes
pub trait Writer {
    /// The error type returned by write operations
    type Error;

    /// Write a prefix of `data`.
    /// Returns how many leading bytes were accepted.
    ///
    /// # Contract
    /// - Accepting fewer bytes than offered is fine; the remainder is offered again
    /// - Returning 0 for non-empty `data` means the sink cannot make progress
    fn write(&mut self, data: &[u8]) -> Result<usize, Self::Error>;
}

impl<W: Writer + ?Sized> Writer for &mut W {
    type Error = W::Error;

    fn write(&mut self, data: &[u8]) -> Result<usize, Self::Error> {
        (**self).write(data)
    }
}

/// Outcome of pushing a whole run into a writer
pub(crate) enum WriteAllError<E> {
    Writer(E),
    Stalled,
}

/// Offers `data` to the writer until all of it has been accepted.
pub(crate) fn write_all<W: Writer + ?Sized>(
    writer: &mut W,
    mut data: &[u8],
) -> Result<(), WriteAllError<W::Error>> {
    while !data.is_empty() {
        let accepted = writer.write(data).map_err(WriteAllError::Writer)?;
        if accepted == 0 {
            return Err(WriteAllError::Stalled);
        }
        data = data.get(accepted..).unwrap_or_default();
    }
    Ok(())
}

/// A [`Writer`] that drops all bytes, keeping only a count
#[derive(Debug, Default, Clone, Copy)]
pub struct Discard {
    count: usize,
}

impl Discard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total bytes dropped so far
    pub fn count(&self) -> usize {
        self.count
    }
}

impl Writer for Discard {
    type Error = core::convert::Infallible;

    fn write(&mut self, data: &[u8]) -> Result<usize, Self::Error> {
        self.count = self.count.saturating_add(data.len());
        Ok(data.len())
    }
}

/// Error returned by [`SliceWriter`] when the slice has no room left
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceFull;

/// A [`Writer`] filling a caller-provided byte slice
///
/// ```rust
/// use picotok::{ChunkReader, Scanner, SliceWriter, Token};
///
/// let mut buffer = [0u8; 16];
/// let mut scanner = Scanner::new(ChunkReader::full_slice(br#""key""#), &mut buffer);
/// assert_eq!(scanner.next_token(), Ok(Token::String));
///
/// let mut out = [0u8; 8];
/// let mut sink = SliceWriter::new(&mut out);
/// scanner.read_string(&mut sink).unwrap();
/// assert_eq!(sink.written(), b"key");
/// ```
#[derive(Debug)]
pub struct SliceWriter<'a> {
    buf: &'a mut [u8],
    len: usize,
}

impl<'a> SliceWriter<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, len: 0 }
    }

    /// Bytes written so far
    pub fn written(&self) -> &[u8] {
        self.buf.get(..self.len).unwrap_or_default()
    }

    /// Forget written bytes, keeping the slice for the next payload
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Room left in the slice
    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.len)
    }
}

impl<'a> Writer for SliceWriter<'a> {
    type Error = SliceFull;

    fn write(&mut self, data: &[u8]) -> Result<usize, Self::Error> {
        if data.is_empty() {
            return Ok(0);
        }
        let to_copy = data.len().min(self.remaining());
        if to_copy == 0 {
            return Err(SliceFull);
        }
        let end = self.len.wrapping_add(to_copy);
        match (self.buf.get_mut(self.len..end), data.get(..to_copy)) {
            (Some(dest), Some(src)) => dest.copy_from_slice(src),
            _ => return Err(SliceFull),
        }
        self.len = end;
        Ok(to_copy)
    }
}

/// A [`Writer`] that forwards at most `chunk_size` bytes per call
///
/// Behaves like a small buffered writer in front of another sink: payloads
/// longer than the chunk size arrive as several writes.
#[derive(Debug)]
pub struct ChunkWriter<W> {
    inner: W,
    chunk_size: usize,
    writes: usize,
}

impl<W: Writer> ChunkWriter<W> {
    /// Wrap `inner`, accepting at most `chunk_size` bytes per call (minimum 1)
    pub fn new(inner: W, chunk_size: usize) -> Self {
        Self {
            inner,
            chunk_size: chunk_size.max(1),
            writes: 0,
        }
    }

    /// Number of calls forwarded to the inner writer
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Writer> Writer for ChunkWriter<W> {
    type Error = W::Error;

    fn write(&mut self, data: &[u8]) -> Result<usize, Self::Error> {
        let limit = data.len().min(self.chunk_size);
        self.writes = self.writes.saturating_add(1);
        self.inner.write(data.get(..limit).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discard_counts() {
        let mut sink = Discard::new();
        assert_eq!(sink.write(b"hello"), Ok(5));
        assert_eq!(sink.write(b""), Ok(0));
        assert_eq!(sink.count(), 5);
    }

    #[test]
    fn test_slice_writer_fills_then_fails() {
        let mut out = [0u8; 4];
        let mut sink = SliceWriter::new(&mut out);
        assert_eq!(sink.write(b"abc"), Ok(3));
        assert_eq!(sink.write(b"def"), Ok(1));
        assert_eq!(sink.written(), b"abcd");
        assert_eq!(sink.write(b"g"), Err(SliceFull));

        sink.clear();
        assert_eq!(sink.remaining(), 4);
        assert_eq!(sink.write(b"xy"), Ok(2));
        assert_eq!(sink.written(), b"xy");
    }

    #[test]
    fn test_chunk_writer_limits_each_call() {
        let mut out = [0u8; 16];
        let mut sink = ChunkWriter::new(SliceWriter::new(&mut out), 2);
        assert_eq!(sink.write(b"12345"), Ok(2));
        assert_eq!(sink.write(b"345"), Ok(2));
        assert_eq!(sink.writes(), 2);
        assert_eq!(sink.get_ref().written(), b"1234");
    }

    #[test]
    fn test_write_all_splits_across_calls() {
        let mut out = [0u8; 16];
        let mut sink = ChunkWriter::new(SliceWriter::new(&mut out), 3);
        assert!(write_all(&mut sink, b"1234567").is_ok());
        assert_eq!(sink.writes(), 3);
        assert_eq!(sink.into_inner().written(), b"1234567");
    }

    #[test]
    fn test_write_all_reports_stall() {
        struct Stuck;
        impl Writer for Stuck {
            type Error = ();
            fn write(&mut self, _data: &[u8]) -> Result<usize, ()> {
                Ok(0)
            }
        }
        assert!(matches!(
            write_all(&mut Stuck, b"x"),
            Err(WriteAllError::Stalled)
        ));
        assert!(write_all(&mut Stuck, b"").is_ok());
    }
}

// SPDX-License-Identifier: Apache-2.0

//! A convenience Reader implementation for in-memory input.
//!
//! [`ChunkReader`] feeds the [`Scanner`](crate::Scanner) from a byte slice,
//! either as fast as the scanner buffer allows or a fixed number of bytes at a
//! time. The chunked mode simulates packets or short reads and is handy for
//! exercising payloads that straddle refills.
//!
//! For real I/O, implement [`Reader`] for your input source (UART, socket,
//! flash), or enable the `std` feature and wrap any `std::io::Read` in
//! [`IoReader`](crate::IoReader).

use crate::Reader;

/// A [`Reader`] over a byte slice, optionally limited to `chunk_size` bytes per read
///
/// # Example: Chunked Reading
///
/// ```rust
/// use picotok::{ChunkReader, Scanner, Token};
///
/// // The scanner sees at most 2 bytes per refill
/// let reader = ChunkReader::new(b"[null]", 2);
/// let mut buffer = [0u8; 16];
/// let mut scanner = Scanner::new(reader, &mut buffer);
///
/// assert_eq!(scanner.next_token(), Ok(Token::ArrayOpen));
/// assert_eq!(scanner.next_token(), Ok(Token::Null));
/// assert_eq!(scanner.next_token(), Ok(Token::ArrayClose));
/// ```
#[derive(Debug, Clone)]
pub struct ChunkReader<'a> {
    data: &'a [u8],
    pos: usize,
    chunk_size: usize,
}

impl<'a> ChunkReader<'a> {
    /// Create a reader returning at most `chunk_size` bytes per `read()` (minimum 1)
    pub fn new(data: &'a [u8], chunk_size: usize) -> Self {
        Self {
            data,
            pos: 0,
            chunk_size: chunk_size.max(1),
        }
    }

    /// Create a reader that hands out as much of the slice as each read can take.
    pub fn full_slice(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            chunk_size: usize::MAX,
        }
    }

    /// Bytes not yet handed out
    pub fn remaining(&self) -> &'a [u8] {
        self.data.get(self.pos..).unwrap_or_default()
    }
}

impl<'a> Reader for ChunkReader<'a> {
    type Error = ();

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let remaining = self.remaining();
        let to_copy = remaining.len().min(buf.len()).min(self.chunk_size);
        if to_copy == 0 {
            return Ok(0);
        }

        match (buf.get_mut(..to_copy), remaining.get(..to_copy)) {
            (Some(dest), Some(src)) => dest.copy_from_slice(src),
            _ => return Ok(0),
        }
        self.pos = self.pos.saturating_add(to_copy);
        Ok(to_copy)
    }
}

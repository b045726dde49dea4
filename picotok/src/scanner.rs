// SPDX-License-Identifier: Apache-2.0

use crate::byte_class::{self, Lead};
use crate::sink::{self, Discard, WriteAllError, Writer};
use crate::{ScanError, Token};

use log::{debug, trace};

/// Recommended scanner buffer size in bytes.
///
/// Any size works, down to a single byte; larger buffers only mean fewer
/// calls into the [`Reader`] for long payloads.
pub const DEFAULT_BUFFER_SIZE: usize = 64;

/// Trait for input sources that can provide data to the scanner
pub trait Reader {
    /// The error type returned by read operations
    type Error;

    /// Read data into the provided buffer.
    /// Returns the number of bytes read, or an error.
    ///
    /// # Contract
    /// - A return value of 0 **MUST** indicate true end of stream
    /// - Implementations **MUST NOT** return 0 unless no more data will ever be available
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;
}

impl<R: Reader + ?Sized> Reader for &mut R {
    type Error = R::Error;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        (**self).read(buf)
    }
}

/// Push one buffered run into the sink.
fn emit<RE, W: Writer + ?Sized>(sink: &mut W, run: &[u8]) -> Result<(), ScanError<RE, W::Error>> {
    sink::write_all(sink, run).map_err(|err| match err {
        WriteAllError::Writer(e) => ScanError::Writer(e),
        WriteAllError::Stalled => ScanError::WriterStalled,
    })
}

/// A streaming JSON token scanner over a fixed caller-provided buffer
///
/// The scanner pulls bytes from a [`Reader`] into `buffer` and hands out
/// [`Token`]s one at a time. It checks nothing about document structure:
/// `[}` is two perfectly good tokens. Number and string payloads are copied
/// from the buffer straight into a [`Writer`], so values of any length pass
/// through a buffer of any size.
///
/// ```rust
/// use picotok::{ChunkReader, Scanner, SliceWriter, Token};
///
/// let mut buffer = [0u8; picotok::DEFAULT_BUFFER_SIZE];
/// let mut scanner = Scanner::new(ChunkReader::full_slice(b"[12, true]"), &mut buffer);
///
/// assert_eq!(scanner.next_token(), Ok(Token::ArrayOpen));
/// assert_eq!(scanner.next_token(), Ok(Token::Number));
/// let mut out = [0u8; 8];
/// let mut number = SliceWriter::new(&mut out);
/// assert_eq!(scanner.read_number(&mut number), Ok(2));
/// assert_eq!(number.written(), b"12");
/// assert_eq!(scanner.next_token(), Ok(Token::Comma));
/// assert_eq!(scanner.next_token(), Ok(Token::True));
/// assert_eq!(scanner.next_token(), Ok(Token::ArrayClose));
/// assert!(scanner.next_token().unwrap_err().is_end_of_stream());
/// ```
pub struct Scanner<'b, R: Reader> {
    /// Source of input bytes
    reader: R,
    /// Fixed buffer, never reallocated
    buffer: &'b mut [u8],
    /// Next unconsumed byte
    read_pos: usize,
    /// One past the last valid byte (buffer[read_pos..fill_end] is unread input)
    fill_end: usize,
    /// Report input ending inside a string instead of accepting it
    strict_strings: bool,
}

impl<'b, R: Reader> Scanner<'b, R> {
    /// Create a scanner reading from `reader`, using `buffer` for all input.
    pub fn new(reader: R, buffer: &'b mut [u8]) -> Self {
        Self {
            reader,
            buffer,
            read_pos: 0,
            fill_end: 0,
            strict_strings: false,
        }
    }

    /// Enable or disable strict strings.
    ///
    /// By default a string cut off by the end of input is returned as if it
    /// had been closed there. With strict strings, [`Scanner::read_string`]
    /// fails with [`ScanError::UnterminatedString`] instead.
    pub fn with_strict_strings(mut self, strict: bool) -> Self {
        self.strict_strings = strict;
        self
    }

    /// Returns the next token.
    ///
    /// Leading whitespace is skipped. Punctuation and the `true`, `false` and
    /// `null` literals are consumed; for [`Token::Number`] and
    /// [`Token::String`] the payload is left in place for
    /// [`Scanner::read_number`] / [`Scanner::read_string`].
    ///
    /// Fails with [`ScanError::EndOfStream`] once the input holds nothing but
    /// whitespace.
    pub fn next_token(&mut self) -> Result<Token, ScanError<R::Error>> {
        let byte = self.peek()?;
        match byte_class::lead(byte) {
            Some(Lead::Punct(token)) => {
                self.read_pos = self.read_pos.wrapping_add(1);
                Ok(token)
            }
            Some(Lead::Payload(token)) => Ok(token),
            Some(Lead::Literal(token, word)) => {
                self.read_literal(word)?;
                Ok(token)
            }
            None => {
                debug!("No token starts with byte {:#04x}", byte);
                Err(ScanError::InvalidByte(byte))
            }
        }
    }

    /// Writes the number at the cursor into `sink`, returning the byte count.
    ///
    /// The number ends at the first byte outside `+ - . 0-9 E e`, which is
    /// left for the next token, or at the end of input.
    pub fn read_number<W: Writer + ?Sized>(
        &mut self,
        sink: &mut W,
    ) -> Result<usize, ScanError<R::Error, W::Error>> {
        if self.read_pos >= self.fill_end {
            self.refill().map_err(ScanError::<_, W::Error>::widen)?;
        }

        let mut written = 0usize;
        loop {
            let pending = self.pending();
            let end = pending.iter().position(|&b| !byte_class::is_number_char(b));
            let run_len = end.unwrap_or(pending.len());
            emit::<R::Error, _>(sink, pending.get(..run_len).unwrap_or_default())?;

            written = written.saturating_add(run_len);
            self.read_pos = self.read_pos.wrapping_add(run_len);
            if end.is_some() {
                return Ok(written);
            }

            match self.refill() {
                Ok(()) => {}
                // A number may be the last thing in the stream
                Err(ScanError::EndOfStream) => return Ok(written),
                Err(e) => return Err(ScanError::widen(e)),
            }
        }
    }

    /// Writes the string at the cursor into `sink`, returning the byte count.
    ///
    /// The cursor must sit on the opening quote. Everything up to the closing
    /// quote is written verbatim, escape sequences included; a quote right
    /// after an unescaped backslash does not close the string.
    pub fn read_string<W: Writer + ?Sized>(
        &mut self,
        sink: &mut W,
    ) -> Result<usize, ScanError<R::Error, W::Error>> {
        if self.read_pos >= self.fill_end {
            self.refill().map_err(ScanError::<_, W::Error>::widen)?;
        }
        // opening quote
        self.read_pos = self.read_pos.wrapping_add(1);

        // previous byte was an unescaped backslash, carried across refills
        let mut escaped = false;
        let mut written = 0usize;
        loop {
            let pending = self.pending();
            let mut close = None;
            for (i, &b) in pending.iter().enumerate() {
                if b == b'"' && !escaped {
                    close = Some(i);
                    break;
                }
                escaped = b == b'\\' && !escaped;
            }
            let run_len = close.unwrap_or(pending.len());
            emit::<R::Error, _>(sink, pending.get(..run_len).unwrap_or_default())?;

            written = written.saturating_add(run_len);
            self.read_pos = self.read_pos.wrapping_add(run_len);
            if close.is_some() {
                // closing quote
                self.read_pos = self.read_pos.wrapping_add(1);
                return Ok(written);
            }

            match self.refill() {
                Ok(()) => {}
                Err(ScanError::EndOfStream) if self.strict_strings => {
                    return Err(ScanError::UnterminatedString)
                }
                Err(ScanError::EndOfStream) => return Ok(written),
                Err(e) => return Err(ScanError::widen(e)),
            }
        }
    }

    /// Extracts and drops the payload of `token`, returning its length.
    ///
    /// Tokens without a payload are a no-op.
    pub fn skip_payload(&mut self, token: Token) -> Result<usize, ScanError<R::Error>> {
        let mut sink = Discard::new();
        match token {
            Token::Number => self.read_number(&mut sink),
            Token::String => self.read_string(&mut sink),
            _ => Ok(0),
        }
    }

    /// Rebind the scanner to a new reader, returning the previous one.
    ///
    /// Buffered input from the previous reader is dropped. The buffer itself
    /// is kept, so one buffer serves any number of inputs.
    pub fn reset(&mut self, reader: R) -> R {
        debug!(
            "Scanner reset, dropping {} buffered bytes",
            self.buffered_len()
        );
        self.read_pos = 0;
        self.fill_end = 0;
        core::mem::replace(&mut self.reader, reader)
    }

    /// Size of the scanner buffer
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Bytes read from the reader but not consumed yet
    pub fn buffered_len(&self) -> usize {
        self.fill_end.saturating_sub(self.read_pos)
    }

    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    pub fn get_mut(&mut self) -> &mut R {
        &mut self.reader
    }

    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Unread buffered input
    fn pending(&self) -> &[u8] {
        self.buffer
            .get(self.read_pos..self.fill_end)
            .unwrap_or_default()
    }

    /// Skip whitespace, refilling as needed, and return the first
    /// significant byte without consuming it.
    fn peek(&mut self) -> Result<u8, ScanError<R::Error>> {
        loop {
            let found = self
                .pending()
                .iter()
                .enumerate()
                .find(|&(_, &b)| !byte_class::is_whitespace(b))
                .map(|(offset, &b)| (offset, b));
            match found {
                Some((offset, byte)) => {
                    self.read_pos = self.read_pos.wrapping_add(offset);
                    return Ok(byte);
                }
                None => self.refill()?,
            }
        }
    }

    /// Match `word` against the input, consuming it.
    fn read_literal(&mut self, word: &'static str) -> Result<(), ScanError<R::Error>> {
        for (index, &expected) in word.as_bytes().iter().enumerate() {
            if self.read_pos >= self.fill_end {
                match self.refill() {
                    Ok(()) => {}
                    Err(ScanError::EndOfStream) => {
                        return Err(ScanError::LiteralMismatch {
                            expected: word,
                            found: None,
                            index,
                        })
                    }
                    Err(e) => return Err(e),
                }
            }
            match self.pending().first().copied() {
                Some(b) if b == expected => self.read_pos = self.read_pos.wrapping_add(1),
                found => {
                    return Err(ScanError::LiteralMismatch {
                        expected: word,
                        found,
                        index,
                    })
                }
            }
        }
        Ok(())
    }

    /// Discard consumed input and pull the next chunk from the reader.
    fn refill(&mut self) -> Result<(), ScanError<R::Error>> {
        self.read_pos = 0;
        self.fill_end = 0;
        let bytes_read = self
            .reader
            .read(&mut *self.buffer)
            .map_err(ScanError::Reader)?;
        if bytes_read == 0 {
            debug!("Reader reached end of stream");
            return Err(ScanError::EndOfStream);
        }
        trace!("Refilled {} bytes", bytes_read);
        // A reader claiming more than it was given cannot push fill_end past the buffer
        self.fill_end = bytes_read.min(self.buffer.len());
        Ok(())
    }
}

// SPDX-License-Identifier: Apache-2.0

use core::convert::Infallible;

/// Errors that can occur while scanning
///
/// `RE` is the error type of the [`Reader`](crate::Reader) and `WE` the error
/// type of the [`Writer`](crate::Writer) used for extraction. Both are carried
/// unchanged. Token classification never writes, so its `WE` is
/// [`Infallible`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanError<RE, WE = Infallible> {
    /// The input is exhausted. This is the normal way a scan ends.
    EndOfStream,
    /// The next significant byte does not start any token.
    InvalidByte(u8),
    /// A `true`, `false` or `null` literal did not match.
    LiteralMismatch {
        /// The literal being matched
        expected: &'static str,
        /// Byte found instead, `None` if the input ended
        found: Option<u8>,
        /// Zero-based index within the literal
        index: usize,
    },
    /// Input ended inside a string. Only reported with strict strings enabled.
    UnterminatedString,
    /// Error from the underlying reader (I/O error, not end-of-stream)
    Reader(RE),
    /// Error from the output sink
    Writer(WE),
    /// The output sink accepted zero bytes of a non-empty write
    WriterStalled,
}

impl<RE, WE> ScanError<RE, WE> {
    /// True for the clean end-of-input signal.
    pub fn is_end_of_stream(&self) -> bool {
        matches!(self, ScanError::EndOfStream)
    }

    /// Re-types an error that cannot carry a writer error, so classification
    /// errors compose with extraction errors in one `?` chain.
    pub fn widen(err: ScanError<RE, Infallible>) -> Self {
        match err {
            ScanError::EndOfStream => ScanError::EndOfStream,
            ScanError::InvalidByte(b) => ScanError::InvalidByte(b),
            ScanError::LiteralMismatch {
                expected,
                found,
                index,
            } => ScanError::LiteralMismatch {
                expected,
                found,
                index,
            },
            ScanError::UnterminatedString => ScanError::UnterminatedString,
            ScanError::Reader(e) => ScanError::Reader(e),
            ScanError::WriterStalled => ScanError::WriterStalled,
            ScanError::Writer(never) => match never {},
        }
    }
}

impl<RE: core::fmt::Debug, WE: core::fmt::Debug> core::fmt::Display for ScanError<RE, WE> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ScanError::EndOfStream => write!(f, "end of stream"),
            ScanError::InvalidByte(b) => write!(f, "invalid json byte {:?}", *b as char),
            ScanError::LiteralMismatch {
                expected,
                found: Some(b),
                index,
            } => write!(f, "expected {expected} got {} at index {index}", *b as char),
            ScanError::LiteralMismatch {
                expected,
                found: None,
                ..
            } => write!(f, "expected {expected} got EOF"),
            ScanError::UnterminatedString => write!(f, "unterminated string"),
            ScanError::Reader(e) => write!(f, "reader error: {e:?}"),
            ScanError::Writer(e) => write!(f, "writer error: {e:?}"),
            ScanError::WriterStalled => write!(f, "writer accepted no bytes"),
        }
    }
}

#[cfg(feature = "std")]
impl<RE: core::fmt::Debug, WE: core::fmt::Debug> std::error::Error for ScanError<RE, WE> {}

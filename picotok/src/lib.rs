// SPDX-License-Identifier: Apache-2.0

//! A streaming, allocation-free JSON token scanner.
//!
//! [`Scanner`] turns a byte stream into JSON lexical [`Token`]s using one
//! fixed buffer supplied by the caller. It does not check document
//! structure, decode escapes or convert numbers: string and number payloads
//! are streamed byte for byte into a caller-chosen [`Writer`], so values much
//! larger than the buffer pass through it without ever being held in full.
//!
//! ```rust
//! use picotok::{ChunkReader, Discard, ScanError, Scanner, Token};
//!
//! let json = br#"{"k1": "val", "k2": 42}"#;
//! let mut buffer = [0u8; 8];
//! let mut scanner = Scanner::new(ChunkReader::full_slice(json), &mut buffer);
//!
//! let mut count = 0;
//! loop {
//!     match scanner.next_token() {
//!         Ok(Token::Number) => { scanner.read_number(&mut Discard::new()).unwrap(); }
//!         Ok(Token::String) => { scanner.read_string(&mut Discard::new()).unwrap(); }
//!         Ok(_) => {}
//!         Err(ScanError::EndOfStream) => break,
//!         Err(e) => panic!("{e}"),
//!     }
//!     count += 1;
//! }
//! assert_eq!(count, 9);
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]

mod byte_class;

mod token;
pub use token::Token;

mod scan_error;
pub use scan_error::ScanError;

mod scanner;
pub use scanner::{Reader, Scanner, DEFAULT_BUFFER_SIZE};

mod sink;
pub use sink::{ChunkWriter, Discard, SliceFull, SliceWriter, Writer};

mod chunk_reader;
pub use chunk_reader::ChunkReader;

#[cfg(feature = "std")]
mod io_adapter;
#[cfg(feature = "std")]
pub use io_adapter::{IoReader, IoWriter};

// SPDX-License-Identifier: Apache-2.0

//! Bridges to `std::io`, available with the `std` feature.

use crate::{Reader, Writer};

use std::io::{ErrorKind, Read, Write};

/// A [`Reader`] over any [`std::io::Read`]
///
/// Interrupted reads are retried; every other I/O error reaches the caller
/// unchanged as [`ScanError::Reader`](crate::ScanError::Reader).
#[derive(Debug)]
pub struct IoReader<R>(pub R);

impl<R: Read> Reader for IoReader<R> {
    type Error = std::io::Error;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        loop {
            match self.0.read(buf) {
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                other => return other,
            }
        }
    }
}

/// A [`Writer`] over any [`std::io::Write`]
#[derive(Debug)]
pub struct IoWriter<W>(pub W);

impl<W: Write> Writer for IoWriter<W> {
    type Error = std::io::Error;

    fn write(&mut self, data: &[u8]) -> Result<usize, Self::Error> {
        loop {
            match self.0.write(data) {
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                other => return other,
            }
        }
    }
}

// SPDX-License-Identifier: Apache-2.0

use std::env;
use std::fs::File;
use std::io::{self, Write};

use picotok::{IoReader, IoWriter, ScanError, Scanner, Token};

fn main() {
    env_logger::init();

    let args: Vec<_> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} file.json", args[0]);
        std::process::exit(1);
    }
    let path = &args[1];
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Error: Unable to open file '{}': {}", path, e);
            std::process::exit(1);
        }
    };

    let mut buffer = [0u8; picotok::DEFAULT_BUFFER_SIZE];
    let mut scanner = Scanner::new(IoReader(file), &mut buffer);
    let stdout = io::stdout();
    let mut out = IoWriter(stdout.lock());

    match dump_tokens(&mut scanner, &mut out) {
        Ok(count) => {
            log::info!("{} tokens", count);
            std::process::exit(0);
        }
        Err(e) => {
            eprintln!("Error: Tokenizing '{}' failed: {}", path, e);
            std::process::exit(1);
        }
    }
}

/// Print one token per line, payloads after the token name.
fn dump_tokens<W: Write>(
    scanner: &mut Scanner<'_, IoReader<File>>,
    out: &mut IoWriter<W>,
) -> Result<usize, ScanError<io::Error, io::Error>> {
    let mut count = 0;
    loop {
        let token = match scanner.next_token() {
            Ok(token) => token,
            Err(ScanError::EndOfStream) => return Ok(count),
            Err(e) => return Err(ScanError::widen(e)),
        };
        count += 1;
        write!(out.0, "{:<8}", token.as_str()).map_err(ScanError::Writer)?;
        match token {
            Token::Number => {
                scanner.read_number(out)?;
            }
            Token::String => {
                scanner.read_string(out)?;
            }
            _ => {}
        }
        writeln!(out.0).map_err(ScanError::Writer)?;
    }
}

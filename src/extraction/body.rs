//! Test body extraction by brace balancing.
//!
//! Quoted text (`'`, `"`, and backtick templates as a whole) and comments are
//! skipped, so braces inside them never move the depth counter.

use crate::core::{Error, Result};

/// Yields `(offset, byte)` for every byte outside strings and comments.
struct CodeBytes<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> CodeBytes<'a> {
    fn new(bytes: &'a [u8], start: usize) -> Self {
        Self { bytes, pos: start }
    }

    /// Advance past a quoted run opened at `self.pos`; escape-aware.
    fn skip_quoted(&mut self, quote: u8) {
        let mut i = self.pos + 1;
        while i < self.bytes.len() {
            match self.bytes[i] {
                b'\\' => i += 2,
                b if b == quote => {
                    i += 1;
                    break;
                }
                _ => i += 1,
            }
        }
        self.pos = i.min(self.bytes.len());
    }

    fn skip_until(&mut self, terminator: &[u8]) {
        let rest = &self.bytes[self.pos..];
        self.pos = match rest
            .windows(terminator.len())
            .position(|window| window == terminator)
        {
            Some(found) => self.pos + found + terminator.len(),
            None => self.bytes.len(),
        };
    }
}

impl Iterator for CodeBytes<'_> {
    type Item = (usize, u8);

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.bytes.len() {
            let byte = self.bytes[self.pos];
            let next = self.bytes.get(self.pos + 1).copied();
            match (byte, next) {
                (b'\'' | b'"' | b'`', _) => self.skip_quoted(byte),
                (b'/', Some(b'/')) => {
                    self.pos += 2;
                    self.skip_until(b"\n");
                }
                (b'/', Some(b'*')) => {
                    self.pos += 2;
                    self.skip_until(b"*/");
                }
                _ => {
                    self.pos += 1;
                    return Some((self.pos - 1, byte));
                }
            }
        }
        None
    }
}

enum Opening {
    /// First `{` of the callback.
    Brace(usize),
    /// The call closed before any `{` appeared.
    CloseParen(usize),
    End,
}

/// Extract the body of a test call whose description literal ends at `from`.
///
/// The body runs from the first `{` through its matching `}`, or to the end
/// of the text when unbalanced. An expression-bodied callback with no brace
/// yields the remaining argument text up to the call's closing `)`.
pub fn extract_body(text: &str, from: usize) -> Result<&str> {
    let bytes = text.as_bytes();
    let from = from.min(bytes.len());

    match find_opening(bytes, from) {
        Opening::Brace(open) => {
            let end = find_matching_brace(bytes, open).map_or(bytes.len(), |close| close + 1);
            slice(text, open, end)
        }
        Opening::CloseParen(close) => slice(text, from, close),
        Opening::End => slice(text, from, bytes.len()),
    }
}

fn find_opening(bytes: &[u8], from: usize) -> Opening {
    // `from` sits inside the call's argument list
    let mut paren_depth = 1usize;

    for (offset, byte) in CodeBytes::new(bytes, from) {
        match byte {
            b'{' => return Opening::Brace(offset),
            b'(' => paren_depth += 1,
            b')' => {
                paren_depth -= 1;
                if paren_depth == 0 {
                    return Opening::CloseParen(offset);
                }
            }
            _ => {}
        }
    }
    Opening::End
}

fn find_matching_brace(bytes: &[u8], open: usize) -> Option<usize> {
    let mut depth = 0usize;

    for (offset, byte) in CodeBytes::new(bytes, open) {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(offset);
                }
            }
            _ => {}
        }
    }
    None
}

fn slice(text: &str, start: usize, end: usize) -> Result<&str> {
    text.get(start..end).ok_or_else(|| {
        Error::parse(
            start,
            format!("body span {start}..{end} is not on a character boundary"),
        )
    })
}

//! Test-block extraction for Jest/Vitest/Mocha style test files.
//!
//! Finds `it(...)` and `test(...)` call sites, including the `.skip` and
//! `.only` variants, whose first argument is a quoted description. Matches
//! that sit inside a string, template literal or comment are discarded using
//! [`LexicalScanner`].

pub mod body;

pub use body::extract_body;

use crate::core::{Result, TestStyle};
use crate::lexical::{next_char_boundary, LexicalScanner};
use once_cell::sync::Lazy;
use regex::Regex;

static TEST_CALL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"\b(it|test)(?:\.(?:skip|only))?\s*\(\s*",
        r#"(?:'((?:[^'\\\n]|\\[\s\S])*)'"#,
        r#"|"((?:[^"\\\n]|\\[\s\S])*)""#,
        r"|`((?:[^`\\]|\\[\s\S])*)`)",
    ))
    .expect("test call pattern is valid")
});

/// A test block as found in source, before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTestBlock<'a> {
    /// Description literal contents, escapes left as written.
    pub description: String,
    /// 1-based line of the call site.
    pub line_number: usize,
    pub body: &'a str,
    pub style: TestStyle,
}

/// Extract every real test block from `text` in source order.
pub fn extract_test_blocks(text: &str) -> Result<Vec<RawTestBlock<'_>>> {
    let mut blocks = Vec::new();
    let mut scanner = LexicalScanner::new(text);
    let mut lines = LineCounter::new(text);
    let mut search_from = 0;

    while let Some(caps) = TEST_CALL.captures_at(text, search_from) {
        let Some(whole) = caps.get(0) else {
            break;
        };
        let start = whole.start();

        if !starts_at_call_boundary(text, start) || scanner.is_non_code_at(start) {
            // a rejected match may overlap a real call, so resume just past its start
            search_from = next_char_boundary(text, start);
            continue;
        }

        let style = match caps.get(1).map(|m| m.as_str()) {
            Some("test") => TestStyle::Test,
            _ => TestStyle::It,
        };
        let description = (2..=4)
            .find_map(|group| caps.get(group))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();

        blocks.push(RawTestBlock {
            description,
            line_number: lines.line_at(start),
            body: extract_body(text, whole.end())?,
            style,
        });
        search_from = whole.end();
    }

    Ok(blocks)
}

/// `it`/`test` must not continue an identifier (`$it`) or be a member access
/// (`pattern.test('x')`).
fn starts_at_call_boundary(text: &str, start: usize) -> bool {
    match text[..start].chars().next_back() {
        Some(c) => !(c.is_alphanumeric() || c == '_' || c == '$' || c == '.'),
        None => true,
    }
}

/// Incremental newline counter for non-decreasing offsets.
struct LineCounter<'a> {
    bytes: &'a [u8],
    offset: usize,
    newlines: usize,
}

impl<'a> LineCounter<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            bytes: text.as_bytes(),
            offset: 0,
            newlines: 0,
        }
    }

    fn line_at(&mut self, offset: usize) -> usize {
        let offset = offset.min(self.bytes.len());
        if offset < self.offset {
            self.offset = 0;
            self.newlines = 0;
        }
        self.newlines += self.bytes[self.offset..offset]
            .iter()
            .filter(|&&b| b == b'\n')
            .count();
        self.offset = offset;
        self.newlines + 1
    }
}

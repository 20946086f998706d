//! Lexical position classification for JavaScript/TypeScript source.
//!
//! Decides whether a byte offset lies in real code or inside text that only
//! looks like code: string literals, template literals and comments. The
//! scanner is a single forward pass over bytes with no backtracking. Template
//! substitutions (`${ ... }`) are tracked with an explicit stack of brace
//! depths, so nesting depth is unbounded:
//!
//! ```text
//! `outer ${ `inner ${ x } inner` } outer`
//!  ^^^^^^^^ template          ^^^^^^^^^^ template
//!           ^^ code (frame 1)
//!                     ^^^ code (frame 2)
//! ```
//!
//! All delimiters are ASCII, so scanning bytes is safe for UTF-8 input:
//! continuation bytes never match a delimiter.
//!
//! Regular-expression literals are not recognized; a quote inside `/.../`
//! opens a string.

/// Scanner state at the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Code,
    /// Inside a `'` or `"` string; holds the opening quote.
    Str(u8),
    /// Inside the literal text of a template.
    Template,
    LineComment,
    BlockComment,
}

impl Mode {
    fn is_non_code(self) -> bool {
        !matches!(self, Mode::Code)
    }
}

/// Resumable forward scanner answering "is this offset outside real code?".
///
/// Queries with non-decreasing offsets cost one pass over the text in total.
/// A query behind the current position restarts from the beginning.
#[derive(Debug, Clone)]
pub struct LexicalScanner<'a> {
    bytes: &'a [u8],
    pos: usize,
    mode: Mode,
    /// One entry per open `${`, counting `{` nested inside that substitution.
    template_frames: Vec<usize>,
}

impl<'a> LexicalScanner<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            bytes: text.as_bytes(),
            pos: 0,
            mode: Mode::Code,
            template_frames: Vec::new(),
        }
    }

    /// True iff `offset` is inside a string literal, template literal text,
    /// or comment when the text before it is read as code. Offsets past the
    /// end are clamped to the end of the text.
    pub fn is_non_code_at(&mut self, offset: usize) -> bool {
        let offset = offset.min(self.bytes.len());
        if offset < self.pos {
            self.reset();
        }
        while self.pos < offset {
            self.step();
        }
        if self.pos > offset {
            // offset splits a two-byte token (`//`, `/*`, `*/`, `${`, or an escape)
            return true;
        }
        self.mode.is_non_code()
    }

    /// Current template substitution nesting depth.
    #[cfg(test)]
    fn template_depth(&self) -> usize {
        self.template_frames.len()
    }

    fn reset(&mut self) {
        self.pos = 0;
        self.mode = Mode::Code;
        self.template_frames.clear();
    }

    fn step(&mut self) {
        let byte = self.bytes[self.pos];
        let next = self.bytes.get(self.pos + 1).copied();

        let width = match self.mode {
            Mode::Code => self.step_code(byte, next),
            Mode::Str(quote) => {
                if byte == b'\\' {
                    2
                } else {
                    if byte == quote {
                        self.mode = Mode::Code;
                    }
                    1
                }
            }
            Mode::Template => match (byte, next) {
                (b'\\', _) => 2,
                (b'`', _) => {
                    self.mode = Mode::Code;
                    1
                }
                (b'$', Some(b'{')) => {
                    self.template_frames.push(0);
                    self.mode = Mode::Code;
                    2
                }
                _ => 1,
            },
            Mode::LineComment => {
                if byte == b'\n' {
                    self.mode = Mode::Code;
                }
                1
            }
            Mode::BlockComment => match (byte, next) {
                (b'*', Some(b'/')) => {
                    self.mode = Mode::Code;
                    2
                }
                _ => 1,
            },
        };

        self.pos = (self.pos + width).min(self.bytes.len());
    }

    fn step_code(&mut self, byte: u8, next: Option<u8>) -> usize {
        match (byte, next) {
            (b'\'' | b'"', _) => {
                self.mode = Mode::Str(byte);
                1
            }
            (b'`', _) => {
                self.mode = Mode::Template;
                1
            }
            (b'/', Some(b'/')) => {
                self.mode = Mode::LineComment;
                2
            }
            (b'/', Some(b'*')) => {
                self.mode = Mode::BlockComment;
                2
            }
            (b'{', _) => {
                if let Some(depth) = self.template_frames.last_mut() {
                    *depth += 1;
                }
                1
            }
            (b'}', _) => {
                match self.template_frames.last().copied() {
                    Some(0) => {
                        self.template_frames.pop();
                        self.mode = Mode::Template;
                    }
                    Some(_) => {
                        if let Some(depth) = self.template_frames.last_mut() {
                            *depth -= 1;
                        }
                    }
                    None => {}
                }
                1
            }
            _ => 1,
        }
    }
}

/// True iff `offset` falls inside a string, template literal text, or comment.
/// Offset of the character after the one starting at `offset`.
pub(crate) fn next_char_boundary(text: &str, offset: usize) -> usize {
    text.get(offset..)
        .and_then(|rest| rest.chars().next())
        .map_or(text.len(), |c| offset + c.len_utf8())
}

pub fn is_non_code(text: &str, offset: usize) -> bool {
    LexicalScanner::new(text).is_non_code_at(offset)
}

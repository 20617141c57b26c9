//! Input cursor with line/column bookkeeping.

use ladle_dom::SourceLocation;

/// A forward-only position in the input.
///
/// Byte offsets always sit on character boundaries; lines and columns are
/// counted as characters are consumed.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
    column: usize,
}

impl<'a> Cursor<'a> {
    /// Start at the beginning of `input`.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Current position as a source location.
    #[must_use]
    pub const fn location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column, self.pos)
    }

    /// Current byte offset.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.pos
    }

    /// True once all input has been consumed.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// The unconsumed input.
    #[must_use]
    pub fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// The next character without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// The character after the next one.
    #[must_use]
    pub fn peek_second(&self) -> Option<char> {
        self.rest().chars().nth(1)
    }

    /// Whether the unconsumed input starts with `prefix`.
    #[must_use]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.rest().starts_with(prefix)
    }

    /// Like [`starts_with`](Self::starts_with), ignoring ASCII case.
    #[must_use]
    pub fn starts_with_ignore_case(&self, prefix: &str) -> bool {
        self.rest()
            .as_bytes()
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix.as_bytes()))
    }

    /// Consume one character.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Consume up to `count` characters.
    pub fn bump_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.bump().is_none() {
                break;
            }
        }
    }

    /// Consume characters until the byte offset reaches `target`.
    pub fn advance_to(&mut self, target: usize) {
        while self.pos < target && self.bump().is_some() {}
    }

    /// Consume everything that is left.
    pub fn advance_to_end(&mut self) {
        self.advance_to(self.input.len());
    }

    /// Consume characters while `pred` holds and return them.
    pub fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let start = self.pos;
        while self.peek().is_some_and(&pred) {
            let _ = self.bump();
        }
        &self.input[start..self.pos]
    }

    /// Skip whitespace characters.
    pub fn skip_whitespace(&mut self) {
        let _ = self.take_while(char::is_whitespace);
    }

    /// Absolute byte offset of the next occurrence of `needle`.
    #[must_use]
    pub fn find(&self, needle: &str) -> Option<usize> {
        self.rest().find(needle).map(|i| self.pos + i)
    }

    /// Absolute byte offset of the next occurrence of the ASCII `needle`,
    /// ignoring ASCII case.
    #[must_use]
    pub fn find_ignore_case(&self, needle: &str) -> Option<usize> {
        let needle = needle.as_bytes();
        if needle.is_empty() {
            return Some(self.pos);
        }
        self.rest()
            .as_bytes()
            .windows(needle.len())
            .position(|window| window.eq_ignore_ascii_case(needle))
            .map(|i| self.pos + i)
    }

    /// Input between the current position and `end`.
    #[must_use]
    pub fn slice_to(&self, end: usize) -> &'a str {
        &self.input[self.pos..end]
    }
}

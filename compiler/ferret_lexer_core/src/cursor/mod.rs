//! Bounds-checked character cursor with one character of lookahead.
//!
//! The cursor walks a `&str` forward one `char` at a time. Every read goes
//! through `str::get`, so reaching the end of the text yields `None` rather
//! than an out-of-range index. Position is tracked three ways:
//!
//! - `pos`: byte offset into the text (always on a char boundary)
//! - `line`: 1-based, incremented after consuming `\n`
//! - `column`: 1-based, counted in characters, reset to 1 after `\n`
//!
//! Line and column saturate at `u32::MAX` rather than wrapping.

/// Forward-only cursor over source text.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], so a caller can snapshot its state cheaply.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    text: &'a str,
    /// Byte offset of the current character.
    pos: usize,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at line 1, column 1 of `text`.
    pub fn new(text: &'a str) -> Self {
        Cursor {
            text,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Text from the current position to the end.
    #[inline]
    fn rest(&self) -> &'a str {
        self.text.get(self.pos..).unwrap_or("")
    }

    /// The character at the current position, or `None` at EOF.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// The character after the current one, or `None` if there is none.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        let mut chars = self.rest().chars();
        chars.next();
        chars.next()
    }

    /// Consume the current character and return it.
    ///
    /// Returns `None` (and does not move) at EOF.
    #[inline]
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.current()?;
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.line = self.line.saturating_add(1);
            self.column = 1;
        } else {
            self.column = self.column.saturating_add(1);
        }
        Some(ch)
    }

    /// Advance while `pred` returns `true` for the current character.
    ///
    /// Returns the number of characters consumed.
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> u32 {
        let mut count: u32 = 0;
        while self.current().is_some_and(&pred) {
            self.advance();
            count = count.saturating_add(1);
        }
        count
    }

    /// Current 1-based line.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Current 1-based column, in characters.
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }
}

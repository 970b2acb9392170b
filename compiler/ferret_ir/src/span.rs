//! Source location spans.
//!
//! Spans are line-oriented: a span never crosses a newline, so a
//! `(line, column, length)` triple is enough to locate and highlight it.

use std::fmt;

/// Source location span.
///
/// Layout: 12 bytes total
/// - line: u32 - 1-based line number
/// - column: u32 - 1-based column of the first character
/// - length: u32 - number of characters covered (at least 1 when emitted)
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub line: u32,
    pub column: u32,
    pub length: u32,
}

impl Span {
    /// Create a new span.
    #[inline]
    pub const fn new(line: u32, column: u32, length: u32) -> Self {
        Span {
            line,
            column,
            length,
        }
    }

    /// Create a single-character span.
    #[inline]
    pub const fn point(line: u32, column: u32) -> Self {
        Span {
            line,
            column,
            length: 1,
        }
    }

    /// Column of the last character covered by this span.
    ///
    /// For a zero-length span this is the column just before `column`.
    #[inline]
    pub const fn end_column(&self) -> u32 {
        self.column.saturating_add(self.length).saturating_sub(1)
    }

    /// Grow the span by `n` characters to the right.
    #[inline]
    #[must_use]
    pub const fn extend(self, n: u32) -> Span {
        Span {
            line: self.line,
            column: self.column,
            length: self.length.saturating_add(n),
        }
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}+{}", self.line, self.column, self.length)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

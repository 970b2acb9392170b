//! Single-pass scanner.
//!
//! Walks a [`SourceBuffer`] once with a [`Cursor`], dispatching on the
//! current character:
//!
//! 1. whitespace is skipped
//! 2. a digit starts a numeric run
//! 3. an ASCII letter or `_` starts a name
//! 4. anything else is an invalid character
//!
//! Anomalies never stop the scan. Every one becomes a diagnostic block, and
//! any diagnostic at all turns the whole result into `Err`.

use ferret_diagnostic::{DiagnosticDetails, Diagnostics};
use ferret_ir::{Span, Token, TokenKind, TokenList};
use ferret_lexer_core::{Cursor, SourceBuffer};
use smallvec::SmallVec;

use crate::lex_error::LexError;

/// Anomalies recorded inside one literal or name. Almost always 0-2.
type Anomalies = SmallVec<[LexError; 2]>;

#[inline]
pub(crate) fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

#[inline]
pub(crate) fn is_name_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

#[inline]
pub(crate) fn is_name_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Scanner state for one pass over one buffer.
///
/// Consumed by [`Scanner::tokenize`]; a scanner is never reused.
pub struct Scanner<'a> {
    buffer: &'a SourceBuffer,
    cursor: Cursor<'a>,
    tokens: Vec<Token>,
    diagnostics: Diagnostics,
}

impl<'a> Scanner<'a> {
    pub fn new(buffer: &'a SourceBuffer) -> Self {
        Scanner {
            buffer,
            cursor: buffer.cursor(),
            tokens: Vec::new(),
            diagnostics: Diagnostics::new(),
        }
    }

    /// Run the pass to the end of the buffer.
    ///
    /// Returns every token when the source is clean, or every diagnostic
    /// (and no tokens) otherwise.
    pub fn tokenize(mut self) -> Result<TokenList, Diagnostics> {
        tracing::debug!(file = self.buffer.filepath(), "lexing started");

        while let Some(c) = self.cursor.current() {
            if is_whitespace(c) {
                self.cursor.advance();
            } else if c.is_ascii_digit() {
                self.scan_number();
            } else if is_name_start(c) {
                self.scan_name();
            } else {
                self.scan_invalid_character(c);
            }
        }

        tracing::debug!(
            tokens = self.tokens.len(),
            diagnostics = self.diagnostics.len(),
            "lexing finished"
        );

        if self.diagnostics.is_empty() {
            Ok(TokenList::from_vec(self.tokens))
        } else {
            Err(self.diagnostics)
        }
    }

    /// Scan a run of digits, `.`, letters and `_`.
    ///
    /// A second `.` opens an `InvalidFloatLiteral` span and a letter or `_`
    /// opens an `InvalidNumberLiteral` span. Digits extend whichever span is
    /// open, the first `.` closes it, and switching kind starts a new one.
    fn scan_number(&mut self) {
        let line = self.cursor.line();
        let start = self.cursor.column();
        let mut length = 0;
        let mut seen_dot = false;
        let mut closed = Anomalies::new();
        let mut open: Option<LexError> = None;

        while let Some(c) = self.cursor.current() {
            let here = Span::point(line, self.cursor.column());
            if c.is_ascii_digit() {
                if let Some(err) = open.as_mut() {
                    err.extend();
                }
            } else if c == '.' && !seen_dot {
                seen_dot = true;
                closed.extend(open.take());
            } else if c == '.' || is_name_continue(c) {
                let err = if c == '.' {
                    LexError::invalid_float(here)
                } else {
                    LexError::invalid_number(here)
                };
                match open.as_mut() {
                    Some(current) if current.kind == err.kind => current.extend(),
                    _ => closed.extend(open.replace(err)),
                }
            } else {
                break;
            }
            self.cursor.advance();
            length += 1;
        }
        closed.extend(open);

        if closed.is_empty() {
            let kind = if seen_dot {
                TokenKind::FloatLiteral
            } else {
                TokenKind::IntegerLiteral
            };
            self.tokens.push(Token::new(kind, Span::new(line, start, length)));
        } else {
            for err in closed {
                self.report(err);
            }
        }
    }

    /// Scan a name, flagging characters embedded between name characters.
    ///
    /// At a boundary that is neither whitespace nor EOF the scanner peeks one
    /// character further. If that is a name character the boundary is
    /// recorded and the name continues; otherwise the name ends cleanly.
    fn scan_name(&mut self) {
        let line = self.cursor.line();
        let start = self.cursor.column();
        let mut length = 0;
        let mut embedded = Anomalies::new();

        loop {
            length += self.cursor.eat_while(is_name_continue);
            let Some(boundary) = self.cursor.current() else {
                break;
            };
            if is_whitespace(boundary) || !self.cursor.peek().is_some_and(is_name_continue) {
                break;
            }
            let here = Span::point(line, self.cursor.column());
            embedded.push(LexError::invalid_variable_name(here, boundary));
            self.cursor.advance();
            length += 1;
        }

        if embedded.is_empty() {
            self.tokens
                .push(Token::new(TokenKind::Identifier, Span::new(line, start, length)));
        } else {
            for err in embedded {
                self.report(err);
            }
        }
    }

    fn scan_invalid_character(&mut self, found: char) {
        let here = Span::point(self.cursor.line(), self.cursor.column());
        self.cursor.advance();
        self.report(LexError::invalid_character(here, found));
    }

    /// Turn a recorded anomaly into a diagnostic block.
    fn report(&mut self, err: LexError) {
        tracing::trace!(span = ?err.span, kind = ?err.kind, "lexical anomaly");

        let line_content = self.buffer.line(err.span.line).unwrap_or_default();
        let details = DiagnosticDetails::error(err.kind.code(), self.buffer.filepath(), err.span);
        let info = err.to_error_info(line_content);
        self.diagnostics.create_block(details, info);
    }
}

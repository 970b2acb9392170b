//! Lexer for Ferret.
//!
//! Turns a [`SourceBuffer`] into a [`TokenList`], or into the full batch of
//! [`Diagnostics`] when the source has lexical errors. A pass either fully
//! succeeds or fully fails: tokens are never returned alongside errors.

mod lex_error;
mod scanner;

pub use lex_error::{LexError, LexErrorKind};
pub use scanner::Scanner;

use ferret_diagnostic::Diagnostics;
use ferret_ir::{Token, TokenList};
use ferret_lexer_core::SourceBuffer;

/// Lex a whole buffer in one pass.
#[tracing::instrument(level = "debug", skip_all, fields(
    file = buffer.filepath(),
    bytes = buffer.len(),
))]
pub fn tokenize(buffer: &SourceBuffer) -> Result<TokenList, Diagnostics> {
    Scanner::new(buffer).tokenize()
}

/// Source text of a token.
///
/// Tokens never span lines, so the lexeme is a slice of a single line.
/// Returns `""` for a token that does not belong to `buffer`.
pub fn lexeme<'a>(buffer: &'a SourceBuffer, token: &Token) -> &'a str {
    let span = token.span;
    buffer
        .slice_line(span.line, span.column, span.length)
        .unwrap_or_default()
}

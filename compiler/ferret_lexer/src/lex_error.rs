//! Lexer error types.
//!
//! Errors follow a WHERE+WHAT shape:
//! - WHERE: `span` locating the offending characters
//! - WHAT: `kind` describing what went wrong
//!
//! The kind owns the user-facing text (headline, message, hint), so the
//! scanner only decides where an anomaly is and which kind it is.

use ferret_diagnostic::{ErrorCode, ErrorInfo};
use ferret_ir::Span;

/// A lexical anomaly recorded during a scan.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    /// WHERE the error occurred.
    pub span: Span,
    /// WHAT went wrong.
    pub kind: LexErrorKind,
}

/// What kind of lexer error occurred.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// A second (or later) `.` inside a numeric literal.
    InvalidFloatLiteral,
    /// A letter or `_` inside a numeric literal.
    InvalidNumberLiteral,
    /// A non-name character sitting between two name characters.
    InvalidVariableName { found: char },
    /// A character that does not start any token.
    InvalidCharacter { found: char },
}

impl LexErrorKind {
    /// Stable error code for this kind.
    pub fn code(self) -> ErrorCode {
        match self {
            LexErrorKind::InvalidFloatLiteral => ErrorCode::InvalidFloatLiteral,
            LexErrorKind::InvalidNumberLiteral => ErrorCode::InvalidNumberLiteral,
            LexErrorKind::InvalidVariableName { .. } => ErrorCode::InvalidVariableName,
            LexErrorKind::InvalidCharacter { .. } => ErrorCode::InvalidCharacter,
        }
    }

    /// One-line summary for the report headline.
    pub fn headline(self) -> &'static str {
        self.code().category()
    }

    /// Detailed message shown next to the carets.
    pub fn message(self) -> String {
        match self {
            LexErrorKind::InvalidFloatLiteral => {
                "numbers can have at most one decimal point".to_string()
            }
            LexErrorKind::InvalidNumberLiteral => {
                "numbers may only contain digits and a single decimal point".to_string()
            }
            LexErrorKind::InvalidVariableName { found } => {
                format!("`{}` cannot appear inside a name", found.escape_debug())
            }
            LexErrorKind::InvalidCharacter { found } => {
                format!("`{}` is not recognised", found.escape_debug())
            }
        }
    }

    /// Remediation suggestion.
    pub fn hint(self) -> &'static str {
        match self {
            LexErrorKind::InvalidFloatLiteral => {
                "remove any extra decimal points to form a valid number"
            }
            LexErrorKind::InvalidNumberLiteral => {
                "remove the letters, or start the name with a letter instead of a digit"
            }
            LexErrorKind::InvalidVariableName { .. } => {
                "names may only contain letters, digits and underscores"
            }
            LexErrorKind::InvalidCharacter { .. } => "remove this character",
        }
    }
}

impl LexError {
    pub fn new(span: Span, kind: LexErrorKind) -> Self {
        LexError { span, kind }
    }

    /// Extra `.` in a number, starting at `span`.
    pub fn invalid_float(span: Span) -> Self {
        Self::new(span, LexErrorKind::InvalidFloatLiteral)
    }

    /// Letters or `_` in a number, starting at `span`.
    pub fn invalid_number(span: Span) -> Self {
        Self::new(span, LexErrorKind::InvalidNumberLiteral)
    }

    pub fn invalid_variable_name(span: Span, found: char) -> Self {
        Self::new(span, LexErrorKind::InvalidVariableName { found })
    }

    pub fn invalid_character(span: Span, found: char) -> Self {
        Self::new(span, LexErrorKind::InvalidCharacter { found })
    }

    /// Grow the span over one more character.
    #[inline]
    pub fn extend(&mut self) {
        self.span = self.span.extend(1);
    }

    /// Build the text half of a diagnostic block for this error.
    pub fn to_error_info(&self, line_content: &str) -> ErrorInfo {
        ErrorInfo::new(line_content)
            .with_headline(self.kind.headline())
            .with_message(self.kind.message())
            .with_hint(self.kind.hint())
    }
}

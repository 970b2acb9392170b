//! Core diagnostic types for structured error reporting.
//!
//! A [`DiagnosticBlock`] is assembled from two halves:
//! - [`DiagnosticDetails`]: WHERE and WHICH (severity, file, span, code)
//! - [`ErrorInfo`]: WHAT and HOW (source line, headline, message, hint)
//!
//! The scanner knows the first half from its cursor and builds the second
//! from the error kind, so keeping them apart lets each side construct its
//! own part.

use std::fmt;

use ferret_ir::Span;

use crate::ErrorCode;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Severity {
    #[default]
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Where a diagnostic points and what kind it is.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct DiagnosticDetails {
    pub severity: Severity,
    /// Path of the source file, as shown in the `-->` location line.
    pub filepath: String,
    /// Highlighted span on the offending line.
    pub location: Span,
    pub code: ErrorCode,
}

impl DiagnosticDetails {
    /// Details for an error-severity diagnostic.
    pub fn error(code: ErrorCode, filepath: impl Into<String>, location: Span) -> Self {
        DiagnosticDetails {
            severity: Severity::Error,
            filepath: filepath.into(),
            location,
            code,
        }
    }
}

/// The human-facing text of a diagnostic.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct ErrorInfo {
    /// Raw text of the offending source line, without its terminator.
    pub line_content: String,
    /// One-line summary shown after `error[CODE]:`.
    pub headline: String,
    /// Detailed message shown next to the carets.
    pub message: String,
    /// Remediation suggestion.
    pub hint: String,
}

impl ErrorInfo {
    /// Create error text for the given source line.
    pub fn new(line_content: impl Into<String>) -> Self {
        ErrorInfo {
            line_content: line_content.into(),
            ..ErrorInfo::default()
        }
    }

    /// Set the headline.
    #[must_use]
    pub fn with_headline(mut self, headline: impl Into<String>) -> Self {
        self.headline = headline.into();
        self
    }

    /// Set the detailed message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Set the remediation hint.
    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = hint.into();
        self
    }
}

/// One structured, renderable error record.
///
/// Immutable once created: blocks only come out of
/// [`Diagnostics::create_block`](crate::Diagnostics::create_block).
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct DiagnosticBlock {
    details: DiagnosticDetails,
    info: ErrorInfo,
}

impl DiagnosticBlock {
    pub(crate) fn new(details: DiagnosticDetails, info: ErrorInfo) -> Self {
        DiagnosticBlock { details, info }
    }

    #[inline]
    pub fn severity(&self) -> Severity {
        self.details.severity
    }

    #[inline]
    pub fn filepath(&self) -> &str {
        &self.details.filepath
    }

    #[inline]
    pub fn location(&self) -> Span {
        self.details.location
    }

    #[inline]
    pub fn code(&self) -> ErrorCode {
        self.details.code
    }

    #[inline]
    pub fn line_content(&self) -> &str {
        &self.info.line_content
    }

    #[inline]
    pub fn headline(&self) -> &str {
        &self.info.headline
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.info.message
    }

    #[inline]
    pub fn hint(&self) -> &str {
        &self.info.hint
    }

    pub fn details(&self) -> &DiagnosticDetails {
        &self.details
    }

    pub fn info(&self) -> &ErrorInfo {
        &self.info
    }

    /// Check if this is an error-severity diagnostic.
    pub fn is_error(&self) -> bool {
        self.details.severity == Severity::Error
    }
}

impl fmt::Display for DiagnosticBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}]: {} ({}:{})",
            self.details.severity,
            self.details.code,
            self.info.headline,
            self.details.filepath,
            self.details.location
        )
    }
}

#[cfg(test)]
mod tests;

//! Embedded error documentation for `explain` support.
//!
//! Each error code has a markdown file in this directory that explains the
//! error, shows an example, and describes the fix. The files are embedded at
//! compile time and looked up with [`ErrorDocs::get`].
//!
//! To document a new code, add `EXXXX.md` here and an entry to `DOCS`.

use crate::ErrorCode;

/// Registry of embedded error documentation.
pub struct ErrorDocs;

impl ErrorDocs {
    /// Get the markdown documentation for an error code, if any.
    pub fn get(code: ErrorCode) -> Option<&'static str> {
        DOCS.iter().find(|(c, _)| *c == code).map(|(_, doc)| *doc)
    }

    /// Get all documented error codes.
    pub fn all_codes() -> impl Iterator<Item = ErrorCode> {
        DOCS.iter().map(|(code, _)| *code)
    }
}

static DOCS: &[(ErrorCode, &str)] = &[
    (ErrorCode::InvalidFloatLiteral, include_str!("E0001.md")),
    (ErrorCode::InvalidNumberLiteral, include_str!("E0002.md")),
    (ErrorCode::InvalidVariableName, include_str!("E0003.md")),
    (ErrorCode::InvalidCharacter, include_str!("E0004.md")),
];

#[cfg(test)]
mod tests;

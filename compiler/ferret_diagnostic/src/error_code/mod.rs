//! Error codes for all compiler diagnostics.
//!
//! Each error code has a stable identifier (e.g., `E0001`) used for
//! `explain` lookups and documentation.

use std::fmt;

/// Error codes for all compiler diagnostics.
///
/// Format: E#### where the first digit indicates the phase. Only the
/// lexer (E0xxx) exists so far.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// A numeric literal with more than one decimal point (`E0001`)
    InvalidFloatLiteral,
    /// A stray non-digit character inside a numeric literal (`E0002`)
    InvalidNumberLiteral,
    /// A name split by a character that cannot appear in names (`E0003`)
    InvalidVariableName,
    /// A character no lexical rule accepts (`E0004`)
    InvalidCharacter,
}

impl ErrorCode {
    /// All error code variants, for exhaustive testing and parsing.
    ///
    /// Kept in sync with `as_str()`, which is exhaustive (Rust match
    /// enforces it). The `all_codes_round_trip_through_from_str` test
    /// catches any omission here.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::InvalidFloatLiteral,
        ErrorCode::InvalidNumberLiteral,
        ErrorCode::InvalidVariableName,
        ErrorCode::InvalidCharacter,
    ];

    /// Get the numeric code as a string (e.g., "E0001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidFloatLiteral => "E0001",
            ErrorCode::InvalidNumberLiteral => "E0002",
            ErrorCode::InvalidVariableName => "E0003",
            ErrorCode::InvalidCharacter => "E0004",
        }
    }

    /// Short category name, as used in prose and documentation titles.
    pub fn category(&self) -> &'static str {
        match self {
            ErrorCode::InvalidFloatLiteral => "invalid float literal",
            ErrorCode::InvalidNumberLiteral => "invalid number literal",
            ErrorCode::InvalidVariableName => "invalid variable name",
            ErrorCode::InvalidCharacter => "invalid character",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E0001"`.
///
/// Case-insensitive. Derived from [`ErrorCode::ALL`] and [`ErrorCode::as_str()`],
/// so it stays exhaustive without manual mirroring.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}

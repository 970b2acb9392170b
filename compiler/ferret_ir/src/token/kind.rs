//! Token kind enumeration.

use std::fmt;

/// Every kind of token the language defines.
///
/// The declaration order is part of the contract: [`TokenKind::ordinal`]
/// exposes it to tools that print tokens as `<ordinal>:<lexeme>`.
///
/// The punctuation kinds (`LParen` through `Semicolon`) are reserved for the
/// parser work that follows. The scanner does not produce them yet, so `(`,
/// `)`, `{`, `}` and `;` currently lex as invalid characters.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum TokenKind {
    Identifier,
    IntegerLiteral,
    FloatLiteral,
    LParen,
    RParen,
    LBrace,
    RBrace,
    Semicolon,
}

impl TokenKind {
    /// All variants in declaration order.
    pub const ALL: &[TokenKind] = &[
        TokenKind::Identifier,
        TokenKind::IntegerLiteral,
        TokenKind::FloatLiteral,
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::LBrace,
        TokenKind::RBrace,
        TokenKind::Semicolon,
    ];

    /// Zero-based declaration index.
    #[inline]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Human-readable name for diagnostics and debug output.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::Identifier => "identifier",
            TokenKind::IntegerLiteral => "integer literal",
            TokenKind::FloatLiteral => "float literal",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::LBrace => "`{`",
            TokenKind::RBrace => "`}`",
            TokenKind::Semicolon => "`;`",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

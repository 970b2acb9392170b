//! Ferret IR - shared front-end data types
//!
//! This crate holds the plain value types every compiler stage agrees on:
//! - [`Span`] for 1-based `(line, column, length)` source locations
//! - [`Token`], [`TokenKind`] and [`TokenList`] for lexer output
//!
//! All types are immutable once built and carry `Clone, Eq, Hash, Debug`
//! so later stages can store and compare them freely.

mod span;
mod token;

pub use span::Span;
pub use token::{Token, TokenKind, TokenList};

//! Low-level source handling for the Ferret lexer.
//!
//! - [`SourceBuffer`] owns a file's path and full text, and answers
//!   1-based line lookups for diagnostic rendering.
//! - [`Cursor`] walks that text one character at a time with a single
//!   character of lookahead, tracking 1-based line and column.
//!
//! Loading is the only fallible step ([`SourceError`]). Once a buffer
//! exists it is never mutated.

mod cursor;
mod source_buffer;

pub use cursor::Cursor;
pub use source_buffer::{SourceBuffer, SourceError};

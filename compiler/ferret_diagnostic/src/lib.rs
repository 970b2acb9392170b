//! Diagnostic system for compiler-style error reporting.
//!
//! Every diagnostic carries:
//! - An error code for searchability (`E0001`, ...)
//! - A location (`file:line:column` plus the highlighted span)
//! - The offending source line, captured when the error was found
//! - A headline, a detailed message, and a hint for fixing it
//!
//! # Collect, then render
//!
//! A compiler pass appends [`DiagnosticBlock`]s to a [`Diagnostics`]
//! batch and never stops early. Once the pass is over the batch is handed,
//! read-only, to an emitter:
//!
//! ```text
//! let mut diagnostics = Diagnostics::new();
//! diagnostics.create_block(details, info);
//! // ... keep going, collect everything
//! let report = emitter::render(&diagnostics, Palette::PLAIN);
//! ```

mod collector;
mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;

pub use collector::Diagnostics;
pub use diagnostic::{DiagnosticBlock, DiagnosticDetails, ErrorInfo, Severity};
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;

//! Command handlers for the Ferret compiler CLI.
//!
//! Handlers return the process exit code instead of exiting, so `main`
//! stays the only place that terminates the process.

mod explain;
mod lex;

pub use explain::explain_error;
pub use lex::{lex_file, lex_source, parse_lex_options, LexOptions};

/// Tokens were printed, or documentation was shown.
pub const EXIT_SUCCESS: i32 = 0;
/// The source has lexical errors; the report went to stderr.
pub const EXIT_LEX_ERROR: i32 = 1;
/// The source could not be read, or the command line was malformed.
pub const EXIT_FAILURE: i32 = 2;

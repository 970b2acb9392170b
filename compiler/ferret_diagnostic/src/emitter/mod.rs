//! Diagnostic Emitters
//!
//! Turns a [`Diagnostics`] batch into a compiler-style report. The terminal
//! emitter is the only format today; colours come from an immutable
//! [`Palette`] handed in by the caller.

mod terminal;

pub use terminal::{ColorMode, Palette, TerminalEmitter};

use crate::{DiagnosticBlock, Diagnostics};

/// Trait for emitting diagnostics in various formats.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic block.
    fn emit(&mut self, block: &DiagnosticBlock);

    /// Emit every block of a batch, in collection order.
    fn emit_all(&mut self, diagnostics: &Diagnostics) {
        for block in diagnostics {
            self.emit(block);
        }
    }

    /// Flush any buffered output.
    fn flush(&mut self);

    /// Emit the trailing error count. Writes nothing for zero errors.
    fn emit_summary(&mut self, error_count: usize);
}

/// Render a whole batch, followed by its error count, into a string.
///
/// An empty batch renders as the empty string.
pub fn render(diagnostics: &Diagnostics, palette: Palette) -> String {
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::new(&mut output, palette);
    emitter.emit_all(diagnostics);
    emitter.emit_summary(diagnostics.error_count());
    emitter.flush();
    String::from_utf8_lossy(&output).into_owned()
}

//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.
//!
//! Each block renders as:
//!
//! ```text
//! error[E0001]: invalid float literal
//!  --> main.fl:1:5
//!   |
//! 1 | 12.3.4
//!   |     ^^ numbers can have at most one decimal point
//!   = hint: remove any extra decimal points to form a valid number
//! ```
//!
//! followed by a blank line. The gutter widens with the line number.

use std::borrow::Cow;
use std::io::Write;

use crate::{DiagnosticBlock, Severity};

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[90m"; // Bright black
    pub const CARET: &str = "\x1b[33m"; // Yellow
    pub const HINT: &str = "\x1b[36m"; // Cyan
    pub const GUTTER: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Returns "s" for plural counts, "" for singular.
#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean based on terminal detection.
    ///
    /// For `Auto` mode, `is_tty` determines whether colors should be used.
    /// This parameter is ignored for `Always` and `Never` modes.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse the value of a `--color=` flag.
    pub fn from_flag(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Escape sequences used by the renderer.
///
/// A plain value, never global state: callers pick [`Palette::ANSI`] or
/// [`Palette::PLAIN`] and pass it in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Severity and code in the headline.
    pub error: &'static str,
    /// Headline text and the highlighted excerpt range.
    pub bold: &'static str,
    /// Location line and the excerpt outside the highlighted range.
    pub dim: &'static str,
    /// Gutter bars and line numbers.
    pub gutter: &'static str,
    /// Caret markers and the detailed message.
    pub caret: &'static str,
    /// Hint line.
    pub hint: &'static str,
    pub reset: &'static str,
}

impl Palette {
    pub const ANSI: Palette = Palette {
        error: colors::ERROR,
        bold: colors::BOLD,
        dim: colors::DIM,
        gutter: colors::GUTTER,
        caret: colors::CARET,
        hint: colors::HINT,
        reset: colors::RESET,
    };

    pub const PLAIN: Palette = Palette {
        error: "",
        bold: "",
        dim: "",
        gutter: "",
        caret: "",
        hint: "",
        reset: "",
    };

    /// Pick a palette from a color mode and the caller's TTY detection.
    pub fn for_mode(mode: ColorMode, is_tty: bool) -> Palette {
        if mode.should_use_colors(is_tty) {
            Palette::ANSI
        } else {
            Palette::PLAIN
        }
    }
}

/// Split a line into the text before, inside and after a 1-based char range.
///
/// Out-of-range positions clamp to the end of the line.
fn split_excerpt(line: &str, column: u32, length: u32) -> (&str, &str, &str) {
    let byte_at = |chars: u32| {
        line.char_indices()
            .nth(chars as usize)
            .map_or(line.len(), |(i, _)| i)
    };
    let start_chars = column.saturating_sub(1);
    let start = byte_at(start_chars);
    let end = byte_at(start_chars.saturating_add(length));
    let (before, rest) = line.split_at(start);
    let (inside, after) = rest.split_at(end - start);
    (before, inside, after)
}

/// Excerpt text as written to the terminal.
///
/// A stray `\r` would move the terminal cursor back over the gutter, so it
/// prints as a space.
fn printable(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace('\r', " "))
    } else {
        Cow::Borrowed(text)
    }
}

/// Padding that lines the carets up under the excerpt.
///
/// Tabs are kept so the terminal expands them the same way on both lines.
/// Everything else, `\r` included, becomes a space.
fn caret_padding(before: &str) -> String {
    before
        .chars()
        .map(|c| if c == '\t' { '\t' } else { ' ' })
        .collect()
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    palette: Palette,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a terminal emitter with an explicit palette.
    pub fn new(writer: W, palette: Palette) -> Self {
        TerminalEmitter { writer, palette }
    }

    fn write_headline(&mut self, block: &DiagnosticBlock) {
        let p = self.palette;
        let severity = match block.severity() {
            Severity::Error => p.error,
        };
        let _ = writeln!(
            self.writer,
            "{severity}{}[{}]{}{}: {}{}",
            block.severity(),
            block.code(),
            p.reset,
            p.bold,
            block.headline(),
            p.reset
        );
    }

    fn write_location(&mut self, block: &DiagnosticBlock, pad: &str) {
        let p = self.palette;
        let location = block.location();
        let _ = writeln!(
            self.writer,
            "{pad}{}-->{} {}{}:{}:{}{}",
            p.gutter,
            p.reset,
            p.dim,
            block.filepath(),
            location.line,
            location.column,
            p.reset
        );
    }

    fn write_excerpt(&mut self, block: &DiagnosticBlock, pad: &str) {
        let p = self.palette;
        let location = block.location();
        let (before, inside, after) =
            split_excerpt(block.line_content(), location.column, location.length);
        let padding = caret_padding(before);
        let (before, inside, after) = (printable(before), printable(inside), printable(after));

        let _ = writeln!(self.writer, "{pad} {}|{}", p.gutter, p.reset);
        let _ = writeln!(
            self.writer,
            "{}{} |{} {}{before}{}{}{inside}{}{}{after}{}",
            p.gutter,
            location.line,
            p.reset,
            p.dim,
            p.reset,
            p.bold,
            p.reset,
            p.dim,
            p.reset
        );

        let carets = "^".repeat(location.length.max(1) as usize);
        let _ = writeln!(
            self.writer,
            "{pad} {}|{} {}{}{carets} {}{}",
            p.gutter,
            p.reset,
            padding,
            p.caret,
            block.message(),
            p.reset
        );
    }

    fn write_hint(&mut self, block: &DiagnosticBlock, pad: &str) {
        let p = self.palette;
        let _ = writeln!(
            self.writer,
            "{pad} {}={} {}hint:{} {}",
            p.gutter,
            p.reset,
            p.hint,
            p.reset,
            block.hint()
        );
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, block: &DiagnosticBlock) {
        let pad = " ".repeat(block.location().line.to_string().len());

        self.write_headline(block);
        self.write_location(block, &pad);
        self.write_excerpt(block, &pad);
        self.write_hint(block, &pad);
        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize) {
        if error_count == 0 {
            return;
        }
        let p = self.palette;
        let _ = writeln!(
            self.writer,
            "{}{error_count} error{} generated.{}",
            p.bold,
            plural_s(error_count),
            p.reset
        );
    }
}

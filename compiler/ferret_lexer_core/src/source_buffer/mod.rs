//! Owned source text with a line-start index.
//!
//! The buffer is built once, either from a file on disk or from an
//! in-memory string, and is read-only afterwards. During construction the
//! byte offset of every line start is recorded, so diagnostic rendering can
//! fetch any line in O(1) instead of re-splitting the source.
//!
//! # Line Numbering
//!
//! Lines are 1-based everywhere in this crate: `line(1)` is the first line.
//! A trailing `\n` opens a final, empty line, matching what an editor shows.

use std::path::{Path, PathBuf};

use crate::Cursor;

/// Failure to load a source file.
///
/// Loading is all-or-nothing: on any of these errors no buffer exists and
/// no scanning can happen.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("cannot find file '{}'", .path.display())]
    NotFound { path: PathBuf },

    #[error("permission denied reading '{}'", .path.display())]
    PermissionDenied { path: PathBuf },

    #[error("'{}' contains invalid UTF-8 data", .path.display())]
    InvalidUtf8 { path: PathBuf },

    #[error("error reading '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SourceError {
    fn from_io(path: &Path, err: std::io::Error) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            std::io::ErrorKind::NotFound => SourceError::NotFound { path },
            std::io::ErrorKind::PermissionDenied => SourceError::PermissionDenied { path },
            std::io::ErrorKind::InvalidData => SourceError::InvalidUtf8 { path },
            _ => SourceError::Io { path, source: err },
        }
    }

    /// The path that failed to load.
    pub fn path(&self) -> &Path {
        match self {
            SourceError::NotFound { path }
            | SourceError::PermissionDenied { path }
            | SourceError::InvalidUtf8 { path }
            | SourceError::Io { path, .. } => path,
        }
    }
}

/// A source file resident in memory.
///
/// # Layout
///
/// ```text
/// source:      "let\nx = 1\n"
/// line_starts: [0, 4, 10]
///               ^  ^  ^
///               |  |  line 3 (empty, after the trailing newline)
///               |  line 2
///               line 1
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceBuffer {
    /// Path as given by the caller, used verbatim in diagnostics.
    filepath: String,
    /// Full source text.
    source: String,
    /// Byte offset of each line start. Never empty: `line_starts[0] == 0`.
    line_starts: Vec<usize>,
}

impl SourceBuffer {
    /// Create a buffer from in-memory text.
    pub fn new(filepath: impl Into<String>, source: impl Into<String>) -> Self {
        let source = source.into();
        let line_starts = index_line_starts(&source);
        SourceBuffer {
            filepath: filepath.into(),
            source,
            line_starts,
        }
    }

    /// Load a whole file into a buffer.
    ///
    /// The file is opened, read and closed inside this call; nothing stays
    /// open on either the success or the error path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| SourceError::from_io(path, e))?;
        Ok(Self::new(path.display().to_string(), source))
    }

    /// Path of the file this buffer was loaded from.
    pub fn filepath(&self) -> &str {
        &self.filepath
    }

    /// Read-only view of the full source text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Create a [`Cursor`] positioned at line 1, column 1.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.source)
    }

    /// Length of the source in bytes.
    pub fn len(&self) -> usize {
        self.source.len()
    }

    /// Returns `true` if the source is empty.
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Content of the 1-based line `n`, without its line terminator.
    ///
    /// Both `\n` and `\r\n` terminators are stripped. Returns `None` for
    /// line 0 and for lines past the end of the source.
    pub fn line(&self, n: u32) -> Option<&str> {
        let idx = usize::try_from(n).ok()?.checked_sub(1)?;
        let start = *self.line_starts.get(idx)?;
        let end = match self.line_starts.get(idx + 1) {
            // Next line starts right after this line's '\n'.
            Some(&next) => next - 1,
            None => self.source.len(),
        };
        let text = &self.source[start..end];
        Some(text.strip_suffix('\r').unwrap_or(text))
    }

    /// Number of characters on the 1-based line `n`.
    pub fn line_width(&self, n: u32) -> Option<u32> {
        let count = self.line(n)?.chars().count();
        Some(u32::try_from(count).unwrap_or(u32::MAX))
    }

    /// Text covered by `length` characters starting at the 1-based `column`
    /// of the 1-based `line`.
    ///
    /// Returns `None` if any part of the range falls outside the line.
    pub fn slice_line(&self, line: u32, column: u32, length: u32) -> Option<&str> {
        let text = self.line(line)?;
        let first = usize::try_from(column.checked_sub(1)?).ok()?;
        let length = usize::try_from(length).ok()?;

        // Char boundaries of the line, plus the end of the line itself.
        let mut bounds = text
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(text.len()));
        let start = bounds.nth(first)?;
        let end = if length == 0 {
            start
        } else {
            bounds.nth(length - 1)?
        };
        Some(&text[start..end])
    }
}

/// Record the byte offset of every line start.
///
/// Uses `memchr` for the newline search instead of a byte-at-a-time loop.
fn index_line_starts(source: &str) -> Vec<usize> {
    let mut starts = vec![0];
    starts.extend(memchr::memchr_iter(b'\n', source.as_bytes()).map(|pos| pos + 1));
    starts
}

#[cfg(test)]
mod tests;

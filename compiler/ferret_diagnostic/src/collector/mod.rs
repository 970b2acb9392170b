//! Ordered, append-only collection of diagnostic blocks.
//!
//! The scanner owns one `Diagnostics` for the duration of a pass and appends
//! a block per anomaly in source order. Blocks are never reordered, merged or
//! removed; rendering walks them in insertion order.

use std::fmt;
use std::slice;

use crate::{DiagnosticBlock, DiagnosticDetails, ErrorInfo};

/// Accumulates [`DiagnosticBlock`]s in creation order.
#[derive(Clone, Eq, PartialEq, Default)]
pub struct Diagnostics {
    blocks: Vec<DiagnosticBlock>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Diagnostics { blocks: Vec::new() }
    }

    /// Append a new block built from `details` and `info`.
    ///
    /// Returns a reference to the stored block.
    pub fn create_block(&mut self, details: DiagnosticDetails, info: ErrorInfo) -> &DiagnosticBlock {
        let index = self.blocks.len();
        self.blocks.push(DiagnosticBlock::new(details, info));
        &self.blocks[index]
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Number of error-severity blocks.
    pub fn error_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.is_error()).count()
    }

    pub fn get(&self, index: usize) -> Option<&DiagnosticBlock> {
        self.blocks.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, DiagnosticBlock> {
        self.blocks.iter()
    }
}

impl fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.blocks.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a DiagnosticBlock;
    type IntoIter = slice::Iter<'a, DiagnosticBlock>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

impl IntoIterator for Diagnostics {
    type Item = DiagnosticBlock;
    type IntoIter = std::vec::IntoIter<DiagnosticBlock>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.into_iter()
    }
}

#[cfg(test)]
mod tests;

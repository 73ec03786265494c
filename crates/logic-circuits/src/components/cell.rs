//! Single-bit storage cells.

use crate::Logic;

/// The behavior of a [`BitCell`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    /// Passes its input through unchanged.
    #[default]
    Pass,
    /// Inverts its input.
    Invert,
}

/// A single boolean cell, the leaf of every component tree.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BitCell {
    kind: CellKind,
}

impl BitCell {
    /// Creates a cell which passes its input through.
    pub fn pass() -> Self {
        Self {
            kind: CellKind::Pass,
        }
    }

    /// Creates a cell which inverts its input.
    pub fn invert() -> Self {
        Self {
            kind: CellKind::Invert,
        }
    }

    /// Returns the kind of the cell.
    pub fn kind(&self) -> CellKind {
        self.kind
    }
}

impl Logic for BitCell {
    const NAME: &'static str = "BitCell";

    type Input = bool;
    type Output = bool;

    #[inline]
    fn eval(&self, input: bool) -> bool {
        match self.kind {
            CellKind::Pass => input,
            CellKind::Invert => !input,
        }
    }

    fn cell_count(&self) -> usize {
        1
    }
}

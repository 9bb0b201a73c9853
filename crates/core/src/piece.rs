//! Active piece: a kind, its current mask, and the anchor of the mask's top-left corner.

use serde::{Deserialize, Serialize};

use crate::mask::Mask;
use crate::pieces::shape_of;
use crate::types::PieceKind;

/// Grid coordinate of a mask's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Anchor {
    pub col: i32,
    pub row: i32,
}

impl Anchor {
    pub fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Anchor moved by `(dx, dy)`, `None` if either coordinate overflows.
    pub fn offset(self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self {
            col: self.col.checked_add(dx)?,
            row: self.row.checked_add(dy)?,
        })
    }
}

/// Falling piece
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    mask: Mask,
    anchor: Anchor,
}

impl Piece {
    /// A piece in canonical orientation at `anchor`.
    pub fn new(kind: PieceKind, anchor: Anchor) -> Self {
        Self {
            kind,
            mask: shape_of(kind),
            anchor,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    pub(crate) fn set_anchor(&mut self, anchor: Anchor) {
        self.anchor = anchor;
    }

    /// Swap in a new mask, returning the previous one.
    pub(crate) fn replace_mask(&mut self, mask: Mask) -> Mask {
        std::mem::replace(&mut self.mask, mask)
    }

    /// Absolute `(col, row)` of every occupied cell.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let anchor = self.anchor;
        self.mask
            .occupied()
            .map(move |(x, y, _)| (anchor.col + x as i32, anchor.row + y as i32))
    }
}

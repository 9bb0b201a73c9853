//! Mask module - rectangular cell masks and the 90° rotation transform
//!
//! A mask is a `height × width` grid of cells stored row-major in a fixed-capacity
//! buffer, so masks never allocate. Coordinates are `(x, y)` with `x` the column
//! (left to right) and `y` the row (top to bottom).
//!
//! Rotation is purely geometric: it maps one mask to another and knows nothing
//! about the board. Legality of the rotated mask is checked by the caller.

use arrayvec::ArrayVec;
use thiserror::Error;

use crate::types::{cell_id, Cell, PieceKind};

/// Largest number of cells a mask can hold (a 4x4 box).
pub const MAX_MASK_CELLS: usize = 16;

/// Reasons a mask cannot be built from raw kind ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MaskError {
    #[error("mask has no cells")]
    Empty,
    #[error("mask row {row} has {len} cells, expected {expected}")]
    Ragged { row: usize, len: usize, expected: usize },
    #[error("mask of {cells} cells exceeds the {max} cell limit", max = MAX_MASK_CELLS)]
    TooLarge { cells: usize },
    #[error("invalid kind id {id} (expected 0..=7)")]
    InvalidId { id: u8 },
}

/// Rectangular occupied/empty pattern of a piece.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Mask {
    width: usize,
    height: usize,
    /// Row-major cells (y * width + x)
    cells: ArrayVec<Cell, MAX_MASK_CELLS>,
}

impl Mask {
    /// Build a mask from rows of kind ids (`0` = empty, `1..=7` = kind).
    ///
    /// ```
    /// use blockfall_core::Mask;
    ///
    /// let t = Mask::from_rows(&[[0u8, 3, 0], [3, 3, 3]]).unwrap();
    /// assert_eq!((t.width(), t.height()), (3, 2));
    /// ```
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, MaskError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        if height == 0 || width == 0 {
            return Err(MaskError::Empty);
        }
        if width * height > MAX_MASK_CELLS {
            return Err(MaskError::TooLarge {
                cells: width * height,
            });
        }

        let mut cells = ArrayVec::new();
        for (row, ids) in rows.iter().enumerate() {
            let ids = ids.as_ref();
            if ids.len() != width {
                return Err(MaskError::Ragged {
                    row,
                    len: ids.len(),
                    expected: width,
                });
            }
            for &id in ids {
                let cell = match id {
                    0 => None,
                    _ => Some(PieceKind::from_id(id).ok_or(MaskError::InvalidId { id })?),
                };
                cells.push(cell);
            }
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Build from static shape data known to be well formed.
    pub(crate) fn from_shape(kind: PieceKind, rows: &[&[u8]]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        let cells = rows
            .iter()
            .flat_map(|r| r.iter())
            .map(|&bit| (bit != 0).then_some(kind))
            .collect();
        Self {
            width,
            height,
            cells,
        }
    }

    /// An empty mask of the given size.
    fn blank(width: usize, height: usize) -> Self {
        let mut cells = ArrayVec::new();
        for _ in 0..width * height {
            cells.push(None);
        }
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell at column `x`, row `y`. Out-of-range coordinates read as empty.
    pub fn get(&self, x: usize, y: usize) -> Cell {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells[y * self.width + x]
    }

    fn set(&mut self, x: usize, y: usize, cell: Cell) {
        let idx = y * self.width + x;
        self.cells[idx] = cell;
    }

    /// Row-major cells.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate occupied cells as `(x, y, kind)`.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize, PieceKind)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, cell)| cell.map(|kind| (i % width, i / width, kind)))
    }

    /// Number of occupied cells.
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Rows of kind ids, for tests and debugging output.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.width)
            .map(|row| row.iter().map(|&c| cell_id(c)).collect())
            .collect()
    }

    /// Append the row-major kind ids to `out`.
    pub fn write_ids(&self, out: &mut Vec<u8>) {
        out.extend(self.cells.iter().map(|&c| cell_id(c)));
    }
}

/// Rotate a mask by 90°.
///
/// An `R×C` mask (R rows, C columns) becomes `C×R`:
///
/// - clockwise: `new[x][R-1-y] = old[y][x]`
/// - counter-clockwise: `new[C-1-x][y] = old[y][x]`
///
/// Rotation pivots on the mask's top-left corner with no kick offsets.
///
/// ```
/// use blockfall_core::{rotate, Mask};
///
/// let i = Mask::from_rows(&[[1u8, 1, 1, 1]]).unwrap();
/// let upright = rotate(&i, true);
/// assert_eq!(upright.to_rows(), vec![vec![1], vec![1], vec![1], vec![1]]);
/// ```
pub fn rotate(mask: &Mask, clockwise: bool) -> Mask {
    let rows = mask.height;
    let cols = mask.width;
    let mut out = Mask::blank(rows, cols);

    for y in 0..rows {
        for x in 0..cols {
            let cell = mask.get(x, y);
            if clockwise {
                out.set(rows - 1 - y, x, cell);
            } else {
                out.set(y, cols - 1 - x, cell);
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_rejects_bad_input() {
        let empty: [[u8; 0]; 0] = [];
        assert_eq!(Mask::from_rows(&empty), Err(MaskError::Empty));
        assert_eq!(
            Mask::from_rows(&[vec![1u8, 1], vec![1]]),
            Err(MaskError::Ragged {
                row: 1,
                len: 1,
                expected: 2
            })
        );
        assert_eq!(
            Mask::from_rows(&[[1u8; 5]; 4]),
            Err(MaskError::TooLarge { cells: 20 })
        );
        assert_eq!(
            Mask::from_rows(&[[0u8, 9]]),
            Err(MaskError::InvalidId { id: 9 })
        );
    }

    #[test]
    fn rotate_swaps_dimensions() {
        let s = Mask::from_rows(&[[4u8, 4, 0], [0, 4, 4]]).unwrap();
        let r = rotate(&s, true);
        assert_eq!((r.width(), r.height()), (2, 3));
        let r = rotate(&s, false);
        assert_eq!((r.width(), r.height()), (2, 3));
    }

    #[test]
    fn rotate_cw_then_ccw_is_identity() {
        let j = Mask::from_rows(&[[6u8, 0, 0], [6, 6, 6]]).unwrap();
        assert_eq!(rotate(&rotate(&j, true), false), j);
    }

    #[test]
    fn occupied_reports_coordinates() {
        let t = Mask::from_rows(&[[0u8, 3, 0], [3, 3, 3]]).unwrap();
        let cells: Vec<_> = t.occupied().map(|(x, y, _)| (x, y)).collect();
        assert_eq!(cells, vec![(1, 0), (0, 1), (1, 1), (2, 1)]);
        assert_eq!(t.count(), 4);
    }

    #[test]
    fn get_out_of_range_is_empty() {
        let o = Mask::from_rows(&[[2u8, 2], [2, 2]]).unwrap();
        assert_eq!(o.get(2, 0), None);
        assert_eq!(o.get(0, 2), None);
        assert_eq!(o.get(1, 1), Some(PieceKind::O));
    }
}

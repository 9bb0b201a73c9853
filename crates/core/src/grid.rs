//! Grid module - the board of locked cells
//!
//! The grid is `rows × cols` cells, each empty or holding a piece kind.
//! Cells live in one flat row-major buffer allocated at construction; its size
//! never changes afterwards.
//! Coordinates: `(row, col)` with row 0 at the top and col 0 at the left.

use crate::config::{ConfigError, EngineConfig};
use crate::piece::Piece;
use crate::types::{cell_id, Cell};

/// The locked-cell board
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Flat array of cells, row-major order (row * cols + col)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid. Zero or oversized dimensions are rejected.
    pub fn new(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        let config = EngineConfig {
            rows,
            cols,
            ..EngineConfig::default()
        };
        config.validate()?;
        Ok(Self::from_config(&config))
    }

    /// Create an empty grid from an already validated configuration.
    pub(crate) fn from_config(config: &EngineConfig) -> Self {
        Self {
            rows: config.rows,
            cols: config.cols,
            cells: vec![None; config.rows * config.cols],
        }
    }

    /// Calculate flat index from (row, col)
    #[inline(always)]
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 || row as usize >= self.rows || col as usize >= self.cols {
            return None;
        }
        Some(row as usize * self.cols + col as usize)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get cell at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: i32, col: i32, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Occupancy query used by placement checks.
    ///
    /// Rows above the grid (`row < 0`) are always passable. For in-bounds
    /// coordinates this reports whether the cell is filled. Other coordinates
    /// are the caller's to reject; they read as unoccupied here.
    pub fn is_occupied(&self, row: i32, col: i32) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= self.rows {
            return false;
        }
        self.row(row).iter().all(|cell| cell.is_some())
    }

    /// Cells of one row. Panics if `row >= rows`.
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Write every occupied cell of `piece` into the grid.
    ///
    /// Does not re-check for overlap; the caller has already confirmed the
    /// placement. Cells above the grid are dropped.
    pub fn lock(&mut self, piece: &Piece) {
        let kind = piece.kind();
        for (col, row) in piece.cells() {
            self.set(row, col, Some(kind));
        }
    }

    /// Clear all full rows and return how many were cleared.
    ///
    /// Rows are scanned bottom to top with a read and a write cursor: full rows
    /// are skipped, every other row is copied down to the write cursor, and the
    /// rows left over at the top are emptied. A row that drops into place is
    /// only ever copied, so the result is the same as removing each full row
    /// and re-examining the index it vacated.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.cols;
        let mut cleared = 0usize;
        let mut write_y = self.rows;

        for read_y in (0..self.rows).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }

        cleared
    }

    /// Empty every cell, keeping the dimensions.
    pub fn reset(&mut self) {
        self.cells.fill(None);
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Overwrite `out` with the row-major kind ids (0 = empty).
    pub fn write_ids(&self, out: &mut Vec<u8>) {
        out.clear();
        out.extend(self.cells.iter().map(|&c| cell_id(c)));
    }

    /// Number of filled cells.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

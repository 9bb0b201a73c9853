use serde::Serialize;

use crate::piece::Piece;
use crate::types::{GameStats, LockEvent, PieceKind, Status};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub kind_id: u8,
    pub col: i32,
    pub row: i32,
    pub width: usize,
    pub height: usize,
    /// Row-major kind ids of the current mask (0 = empty)
    pub mask: Vec<u8>,
}

impl From<&Piece> for ActiveSnapshot {
    fn from(value: &Piece) -> Self {
        let mask = value.mask();
        let mut ids = Vec::with_capacity(mask.width() * mask.height());
        mask.write_ids(&mut ids);
        Self {
            kind: value.kind(),
            kind_id: value.kind().id(),
            col: value.anchor().col,
            row: value.anchor().row,
            width: mask.width(),
            height: mask.height(),
            mask: ids,
        }
    }
}

impl ActiveSnapshot {
    /// Kind id the active piece paints at grid `(row, col)`, 0 if none.
    pub fn cell_at(&self, row: i32, col: i32) -> u8 {
        let x = col - self.col;
        let y = row - self.row;
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return 0;
        }
        self.mask[y as usize * self.width + x as usize]
    }
}

/// Read-only view of the game for renderers and other collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
pub struct GameSnapshot {
    pub rows: usize,
    pub cols: usize,
    /// Row-major kind ids of locked cells (0 = empty)
    pub board: Vec<u8>,
    pub active: Option<ActiveSnapshot>,
    pub status: Status,
    pub last_event: Option<LockEvent>,
    pub stats: GameStats,
}

impl GameSnapshot {
    /// Locked kind id at `(row, col)`, 0 when empty or out of range.
    pub fn cell(&self, row: usize, col: usize) -> u8 {
        if row >= self.rows || col >= self.cols {
            return 0;
        }
        self.board[row * self.cols + col]
    }

    pub fn playable(&self) -> bool {
        self.status == Status::Running
    }

    /// Plain-text dump: `.` empty, uppercase letter for locked cells,
    /// lowercase letter for the active piece.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity((self.cols + 1) * self.rows);
        for row in 0..self.rows {
            for col in 0..self.cols {
                let active = self
                    .active
                    .as_ref()
                    .map_or(0, |a| a.cell_at(row as i32, col as i32));
                let ch = match (active, self.cell(row, col)) {
                    (0, 0) => '.',
                    (0, id) => kind_letter(id).to_ascii_uppercase(),
                    (id, _) => kind_letter(id),
                };
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }
}

fn kind_letter(id: u8) -> char {
    PieceKind::from_id(id)
        .and_then(|k| k.as_str().chars().next())
        .unwrap_or('?')
}

//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types shared by the engine and its
//! collaborators (session controllers, renderers, input layers). All types are
//! plain data with no behavior beyond parsing and id mapping.
//!
//! # Board Dimensions
//!
//! The default playfield is 20 rows by 10 columns. Dimensions are chosen at
//! construction time by the engine configuration; these constants are only
//! the defaults.
//!
//! # Kind Ids
//!
//! The seven piece kinds carry stable ids which are the contract between the
//! engine and a renderer's color table:
//!
//! | Kind | Id |
//! |------|----|
//! | I | 1 |
//! | O | 2 |
//! | T | 3 |
//! | S | 4 |
//! | Z | 5 |
//! | J | 6 |
//! | L | 7 |
//!
//! Id `0` always means an empty cell.
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameAction, PieceKind, DEFAULT_COLS, DEFAULT_ROWS};
//!
//! let piece = PieceKind::T;
//! assert_eq!(piece.id(), 3);
//! assert_eq!(PieceKind::from_id(3), Some(PieceKind::T));
//!
//! // Parse from string (case-insensitive)
//! assert_eq!(PieceKind::from_str("t"), Some(piece));
//!
//! // Parse game action
//! let action = GameAction::from_str("moveLeft").unwrap();
//! assert_eq!(action, GameAction::MoveLeft);
//!
//! assert_eq!(DEFAULT_COLS, 10);
//! assert_eq!(DEFAULT_ROWS, 20);
//! ```

use serde::{Deserialize, Serialize};

/// Default board height in cells (20 rows)
pub const DEFAULT_ROWS: usize = 20;

/// Default board width in cells (10 columns)
pub const DEFAULT_COLS: usize = 10;

/// Default gravity tick interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 500;

/// The seven tetromino piece kinds
///
/// - **I**: 1x4 bar
/// - **O**: 2x2 square
/// - **T**: T-shaped
/// - **S**: S-shaped
/// - **Z**: Z-shaped (mirror of S)
/// - **J**: J-shaped
/// - **L**: L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds, ordered by id.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Stable kind id in `1..=7`.
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::I.id(), 1);
    /// assert_eq!(PieceKind::L.id(), 7);
    /// ```
    pub fn id(&self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::O => 2,
            PieceKind::T => 3,
            PieceKind::S => 4,
            PieceKind::Z => 5,
            PieceKind::J => 6,
            PieceKind::L => 7,
        }
    }

    /// Map a kind id back to its kind. Returns `None` for `0` and anything above `7`.
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1..=7 => Some(Self::ALL[(id - 1) as usize]),
            _ => None,
        }
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled with the specified piece kind
pub type Cell = Option<PieceKind>;

/// Kind id of a cell, `0` when empty.
#[inline]
pub fn cell_id(cell: Cell) -> u8 {
    cell.map_or(0, |kind| kind.id())
}

/// Game status as seen by collaborators.
///
/// `Idle` is the state before the first start/reset: no active piece exists
/// and every command is ignored. `Over` is terminal until a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Idle,
    Running,
    Paused,
    Over,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Idle => "idle",
            Status::Running => "running",
            Status::Paused => "paused",
            Status::Over => "over",
        }
    }
}

/// Commands a session accepts from its input layer.
///
/// The closed set is the whole command surface: player moves plus the three
/// lifecycle commands. Mapping physical keys to these is left to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down
    SoftDescend,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
    /// Start a new game (also restarts a running or finished one)
    Reset,
    /// Suspend tick processing
    Pause,
    /// Resume tick processing
    Resume,
}

impl GameAction {
    /// Parse action from string (case-insensitive camelCase names)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("rotateCw"), Some(GameAction::RotateCw));
    /// assert_eq!(GameAction::from_str("start"), Some(GameAction::Reset));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "moveleft" | "left" => Some(GameAction::MoveLeft),
            "moveright" | "right" => Some(GameAction::MoveRight),
            "softdescend" | "down" => Some(GameAction::SoftDescend),
            "rotatecw" | "cw" => Some(GameAction::RotateCw),
            "rotateccw" | "ccw" => Some(GameAction::RotateCcw),
            "reset" | "start" => Some(GameAction::Reset),
            "pause" => Some(GameAction::Pause),
            "resume" => Some(GameAction::Resume),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDescend => "softDescend",
            GameAction::RotateCw => "rotateCw",
            GameAction::RotateCcw => "rotateCcw",
            GameAction::Reset => "reset",
            GameAction::Pause => "pause",
            GameAction::Resume => "resume",
        }
    }

    /// True for the five player commands, false for lifecycle commands.
    pub fn is_player_command(&self) -> bool {
        matches!(
            self,
            GameAction::MoveLeft
                | GameAction::MoveRight
                | GameAction::SoftDescend
                | GameAction::RotateCw
                | GameAction::RotateCcw
        )
    }
}

/// Recorded each time a piece locks into the grid.
///
/// Collaborators (scoring, sound) read this after a call returns instead of
/// subscribing to callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LockEvent {
    /// Kind of the piece that locked
    pub kind: PieceKind,
    /// Rows removed by the line clear that followed the lock
    pub rows_cleared: usize,
    /// True when the spawn after this lock failed
    pub game_over: bool,
}

/// Monotonic counters for the current game, zeroed on reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GameStats {
    pub pieces_spawned: u64,
    pub pieces_locked: u64,
    pub rows_cleared: u64,
    /// Gravity ticks processed while running
    pub ticks: u64,
}

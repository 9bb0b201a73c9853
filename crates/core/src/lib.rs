//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the rules of the falling-block simulation: the grid of
//! locked cells, the piece catalog, the rotation transform and the step
//! function that ties them together. It has no dependencies on rendering,
//! input devices or wall-clock time.
//!
//! - **Deterministic**: the entropy source is injected, so a fixed seed
//!   replays the same game
//! - **Headless**: collaborators observe the game through [`GameSnapshot`]
//!
//! # Module Structure
//!
//! - [`config`]: validated grid dimensions and tick interval
//! - [`grid`]: the board with occupancy queries, locking and line clearing
//! - [`mask`]: rectangular piece masks and the 90° rotation transform
//! - [`pieces`]: canonical shapes of the seven kinds and random kind selection
//! - [`piece`]: the active piece (kind, mask, anchor)
//! - [`game_state`]: spawn, gravity, moves, rotation, game over
//! - [`snapshot`]: read-only views for renderers
//!
//! # Rules
//!
//! - Pieces spawn in canonical orientation at column `cols / 2 - 1`, row 0
//! - Gravity moves the active piece down one row per tick; a piece that
//!   cannot descend locks immediately
//! - Rotation is in place about the anchor with no wall kicks
//! - Full rows are removed after every lock and the rows above shift down
//! - The game ends when a newly spawned piece does not fit
//!
//! # Example
//!
//! ```
//! use blockfall_core::{EngineConfig, GameState, TickOutcome};
//!
//! let mut game = GameState::with_seed(EngineConfig::default(), 12345).unwrap();
//! game.start();
//!
//! game.try_move(1, 0);
//! game.try_rotate(true);
//! assert_eq!(game.tick(), TickOutcome::Descended);
//! ```

pub mod config;
pub mod game_state;
pub mod grid;
pub mod mask;
pub mod piece;
pub mod pieces;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use config::{ConfigError, EngineConfig};
pub use game_state::{GameState, TickOutcome};
pub use grid::Grid;
pub use mask::{rotate, Mask, MaskError};
pub use piece::{Anchor, Piece};
pub use pieces::{random_kind, shape_of};
pub use snapshot::{ActiveSnapshot, GameSnapshot};

//! Game state module - the authoritative step function and command handlers
//!
//! This module ties together the grid, the piece catalog and the rotation
//! transform. It owns the active piece, runs gravity ticks, applies player
//! moves and rotations, and detects game over on spawn.
//!
//! Only two kinds of calls advance play: [`GameState::tick`] (gravity) and the
//! player commands ([`GameState::try_move`], [`GameState::try_rotate`]).
//! Illegal moves and rotations leave the state untouched and return `false`.

use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{ConfigError, EngineConfig};
use crate::grid::Grid;
use crate::mask::{rotate, Mask};
use crate::piece::{Anchor, Piece};
use crate::pieces::random_kind;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{GameStats, LockEvent, PieceKind, Status};

/// What a gravity tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running; nothing happened
    Ignored,
    /// The active piece moved down one row
    Descended,
    /// The active piece locked; a new piece was spawned (or the game ended)
    Locked { rows_cleared: usize },
}

/// Complete game state
///
/// `R` is the entropy source used to pick spawned kinds. It is injected at
/// construction so tests can seed it.
#[derive(Debug, Clone)]
pub struct GameState<R = StdRng> {
    config: EngineConfig,
    grid: Grid,
    active: Option<Piece>,
    status: Status,
    rng: R,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
    stats: GameStats,
}

impl GameState<StdRng> {
    /// Create a game whose spawns are driven by a seeded [`StdRng`].
    pub fn with_seed(config: EngineConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::new(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameState<R> {
    /// Create a new, not yet started game.
    ///
    /// Fails fast on an invalid configuration.
    pub fn new(config: EngineConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            grid: Grid::from_config(&config),
            config,
            active: None,
            status: Status::Idle,
            rng,
            last_event: None,
            stats: GameStats::default(),
        })
    }

    /// Start the game if it has never been started.
    pub fn start(&mut self) {
        if self.status == Status::Idle {
            self.reset();
        }
    }

    /// Clear the grid, drop the active piece and begin a new game.
    ///
    /// Always leaves either a legal active piece with status `Running`, or
    /// status `Over` when even an empty grid cannot host the spawned piece.
    pub fn reset(&mut self) {
        self.grid.reset();
        self.active = None;
        self.last_event = None;
        self.stats = GameStats::default();
        self.status = Status::Running;
        info!(
            "new game on {}x{} grid",
            self.config.rows, self.config.cols
        );
        self.spawn();
    }

    /// Suspend tick processing. Only valid while running.
    pub fn pause(&mut self) -> bool {
        if self.status != Status::Running {
            return false;
        }
        self.status = Status::Paused;
        info!("paused");
        true
    }

    /// Resume tick processing. Only valid while paused.
    pub fn resume(&mut self) -> bool {
        if self.status != Status::Paused {
            return false;
        }
        self.status = Status::Running;
        info!("resumed");
        true
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Direct grid access for collaborators that preload boards (puzzles, tests).
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    pub fn stats(&self) -> GameStats {
        self.stats
    }

    pub fn last_event(&self) -> Option<LockEvent> {
        self.last_event
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Placement rule for a mask at `anchor`.
    ///
    /// Every occupied cell must lie within `[0, cols)` horizontally and above
    /// `rows` vertically. Cells above the grid (`row < 0`) skip the occupancy
    /// check; all others must be empty in the grid.
    pub fn can_place(&self, mask: &Mask, anchor: Anchor) -> bool {
        let cols = self.grid.cols() as i32;
        let rows = self.grid.rows() as i32;

        mask.occupied().all(|(x, y, _)| {
            let (Some(col), Some(row)) = (
                anchor.col.checked_add(x as i32),
                anchor.row.checked_add(y as i32),
            ) else {
                return false;
            };
            if col < 0 || col >= cols || row >= rows {
                return false;
            }
            row < 0 || !self.grid.is_occupied(row, col)
        })
    }

    /// Check if the active piece could move by `(dx, dy)`
    pub fn can_move(&self, dx: i32, dy: i32) -> bool {
        let Some(piece) = self.active.as_ref() else {
            return false;
        };
        match piece.anchor().offset(dx, dy) {
            Some(anchor) => self.can_place(piece.mask(), anchor),
            None => false,
        }
    }

    /// Gravity tick: move the active piece down one row, or lock it, clear
    /// rows and spawn the next piece when it cannot descend.
    pub fn tick(&mut self) -> TickOutcome {
        if self.status != Status::Running {
            return TickOutcome::Ignored;
        }
        self.stats.ticks += 1;
        debug_assert!(self.active.is_some(), "running without an active piece");

        if self.try_move(0, 1) {
            return TickOutcome::Descended;
        }

        let rows_cleared = self.lock_active();
        TickOutcome::Locked { rows_cleared }
    }

    /// Translate the active piece if the target position is legal.
    pub fn try_move(&mut self, dx: i32, dy: i32) -> bool {
        if self.status != Status::Running {
            return false;
        }
        let Some(anchor) = self.active.as_ref().and_then(|p| p.anchor().offset(dx, dy)) else {
            return false;
        };

        if !self.can_move(dx, dy) {
            trace!("move ({}, {}) rejected", dx, dy);
            return false;
        }

        if let Some(piece) = self.active.as_mut() {
            piece.set_anchor(anchor);
        }
        true
    }

    /// Rotate the active piece in place.
    ///
    /// The rotated mask keeps the same anchor; if it does not fit there the
    /// previous mask is restored. No offset search is attempted.
    pub fn try_rotate(&mut self, clockwise: bool) -> bool {
        if self.status != Status::Running {
            return false;
        }
        let Some(mut piece) = self.active.take() else {
            return false;
        };

        let rotated = rotate(piece.mask(), clockwise);
        let previous = piece.replace_mask(rotated);
        let fits = self.can_place(piece.mask(), piece.anchor());
        if !fits {
            piece.replace_mask(previous);
            trace!("rotation (clockwise: {}) rejected", clockwise);
        }

        self.active = Some(piece);
        fits
    }

    /// Spawn a piece of random kind.
    pub fn spawn(&mut self) -> bool {
        let kind = random_kind(&mut self.rng);
        self.spawn_kind(kind)
    }

    /// Spawn a piece of the given kind at the spawn anchor
    /// (`cols / 2 - 1`, row 0) in canonical orientation.
    ///
    /// Moves the game to `Over` if the piece does not fit.
    pub fn spawn_kind(&mut self, kind: PieceKind) -> bool {
        if self.status != Status::Running {
            return false;
        }

        let piece = Piece::new(kind, Anchor::new(self.config.spawn_col(), 0));
        if !self.can_place(piece.mask(), piece.anchor()) {
            self.active = None;
            self.status = Status::Over;
            if let Some(event) = self.last_event.as_mut() {
                event.game_over = true;
            }
            info!(
                "game over: {:?} blocked at spawn after {} pieces",
                kind, self.stats.pieces_locked
            );
            return false;
        }

        debug!("spawned {:?} at {:?}", kind, piece.anchor());
        self.active = Some(piece);
        self.stats.pieces_spawned += 1;
        true
    }

    /// Lock the active piece onto the grid, clear full rows and spawn the next piece.
    ///
    /// Returns the number of rows cleared.
    fn lock_active(&mut self) -> usize {
        let Some(piece) = self.active.take() else {
            return 0;
        };

        self.grid.lock(&piece);
        let rows_cleared = self.grid.clear_full_rows();

        self.stats.pieces_locked += 1;
        self.stats.rows_cleared += rows_cleared as u64;
        self.last_event = Some(LockEvent {
            kind: piece.kind(),
            rows_cleared,
            game_over: false,
        });

        debug!("locked {:?} at {:?}", piece.kind(), piece.anchor());
        if rows_cleared > 0 {
            info!("cleared {} row(s)", rows_cleared);
        }

        self.spawn();
        rows_cleared
    }

    /// Write a render snapshot into `out`, reusing its buffers.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.rows = self.grid.rows();
        out.cols = self.grid.cols();
        self.grid.write_ids(&mut out.board);
        out.active = self.active.as_ref().map(ActiveSnapshot::from);
        out.status = self.status;
        out.last_event = self.last_event;
        out.stats = self.stats;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

//! Session controller
//!
//! A [`Session`] owns one game and is the single entry point for the outside
//! world: an input layer feeds it [`GameAction`]s, a timer drives gravity
//! through [`Session::tick`] or [`Session::advance`], and renderers read
//! snapshots back. Every call runs to completion before the next one, so the
//! game is never observed mid-update.

use std::time::Duration;

use log::trace;
use rand::rngs::StdRng;
use rand::Rng;

use crate::clock::TickClock;
use crate::core::{ConfigError, EngineConfig, GameSnapshot, GameState, TickOutcome};
use crate::types::{GameAction, Status};

#[derive(Debug, Clone)]
pub struct Session<R = StdRng> {
    game: GameState<R>,
    clock: TickClock,
}

impl Session<StdRng> {
    pub fn with_seed(config: EngineConfig, seed: u64) -> Result<Self, ConfigError> {
        Ok(Self::from_game(GameState::with_seed(config, seed)?))
    }
}

impl<R: Rng> Session<R> {
    pub fn new(config: EngineConfig, rng: R) -> Result<Self, ConfigError> {
        Ok(Self::from_game(GameState::new(config, rng)?))
    }

    fn from_game(game: GameState<R>) -> Self {
        let clock = TickClock::new(game.config().tick_interval());
        Self { game, clock }
    }

    /// Apply one command. Returns `true` if the game state changed.
    pub fn apply(&mut self, action: GameAction) -> bool {
        let changed = match action {
            GameAction::MoveLeft => self.game.try_move(-1, 0),
            GameAction::MoveRight => self.game.try_move(1, 0),
            GameAction::SoftDescend => self.game.try_move(0, 1),
            GameAction::RotateCw => self.game.try_rotate(true),
            GameAction::RotateCcw => self.game.try_rotate(false),
            GameAction::Reset => {
                self.game.reset();
                self.clock.reset();
                true
            }
            GameAction::Pause => self.game.pause(),
            GameAction::Resume => {
                let resumed = self.game.resume();
                if resumed {
                    self.clock.reset();
                }
                resumed
            }
        };
        if !changed {
            trace!("{} ignored in {} state", action.as_str(), self.game.status().as_str());
        }
        changed
    }

    /// One gravity tick.
    pub fn tick(&mut self) -> TickOutcome {
        self.game.tick()
    }

    /// Feed elapsed wall-clock time and run every tick that became due.
    ///
    /// Time spent while not running is discarded, so resuming never replays
    /// a burst of ticks. Returns the number of ticks processed.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.advance_at_most(elapsed, u32::MAX)
    }

    /// Like [`Session::advance`], but runs no more than `limit` ticks.
    ///
    /// Due ticks beyond the limit are dropped, not carried over.
    pub fn advance_at_most(&mut self, elapsed: Duration, limit: u32) -> u32 {
        if self.game.status() != Status::Running {
            self.clock.reset();
            return 0;
        }

        let due = self.clock.advance(elapsed).min(limit);
        let mut ran = 0;
        for _ in 0..due {
            self.game.tick();
            ran += 1;
            if self.game.status() != Status::Running {
                self.clock.reset();
                break;
            }
        }
        ran
    }

    /// Time until the next gravity tick is due.
    pub fn until_next_tick(&self) -> Duration {
        self.clock.until_next()
    }

    pub fn status(&self) -> Status {
        self.game.status()
    }

    pub fn game(&self) -> &GameState<R> {
        &self.game
    }

    /// Mutable game access for collaborators that preload boards.
    pub fn game_mut(&mut self) -> &mut GameState<R> {
        &mut self.game
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.game.snapshot()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.game.snapshot_into(out);
    }
}

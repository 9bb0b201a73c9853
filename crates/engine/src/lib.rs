//! Session layer over the core game.
//!
//! - [`session`]: command dispatch, gravity ticks and snapshots for one game
//! - [`clock`]: fixed-step accumulator turning wall-clock time into ticks
//! - [`env`]: engine configuration from `BLOCKFALL_*` environment variables
//!
//! ```
//! use std::time::Duration;
//!
//! use blockfall_engine::core::EngineConfig;
//! use blockfall_engine::types::{GameAction, Status};
//! use blockfall_engine::Session;
//!
//! let mut session = Session::with_seed(EngineConfig::default(), 42).unwrap();
//! session.apply(GameAction::Reset);
//! session.apply(GameAction::MoveLeft);
//! assert_eq!(session.advance(Duration::from_millis(1000)), 2);
//! assert_eq!(session.status(), Status::Running);
//! ```

pub mod clock;
pub mod env;
pub mod session;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use clock::TickClock;
pub use env::{config_from_env, EnvError};
pub use session::Session;

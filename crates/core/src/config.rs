//! Engine configuration
//!
//! Board size and gravity interval are fixed when an engine is built. The
//! engine never loads or stores settings itself; a collaborator constructs an
//! [`EngineConfig`] once and passes it in.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_TICK_MS};

/// Largest board the engine accepts, in cells.
pub const MAX_CELLS: usize = 1 << 20;

/// Construction-time configuration errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board must have at least one row")]
    ZeroRows,
    #[error("board must have at least one column")]
    ZeroCols,
    #[error("board of {rows}x{cols} cells exceeds the {max} cell limit", max = MAX_CELLS)]
    TooLarge { rows: usize, cols: usize },
    #[error("tick interval must be greater than zero")]
    ZeroTick,
}

/// Board dimensions and gravity interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub rows: usize,
    pub cols: usize,
    /// Gravity tick interval in milliseconds
    pub tick_ms: u64,
}

impl EngineConfig {
    /// Build a validated configuration.
    pub fn new(rows: usize, cols: usize, tick_ms: u64) -> Result<Self, ConfigError> {
        let config = Self {
            rows,
            cols,
            tick_ms,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check every invariant the engine relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 {
            return Err(ConfigError::ZeroRows);
        }
        if self.cols == 0 {
            return Err(ConfigError::ZeroCols);
        }
        // Coordinates are i32 internally.
        let too_large = self.rows > i32::MAX as usize
            || self.cols > i32::MAX as usize
            || self
                .rows
                .checked_mul(self.cols)
                .map_or(true, |cells| cells > MAX_CELLS);
        if too_large {
            return Err(ConfigError::TooLarge {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::ZeroTick);
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Spawn anchor column: `cols / 2 - 1`, integer division.
    pub fn spawn_col(&self) -> i32 {
        (self.cols / 2) as i32 - 1
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            tick_ms: DEFAULT_TICK_MS,
        }
    }
}

//! Engine configuration from environment variables.
//!
//! - `BLOCKFALL_ROWS`: grid height (default 20)
//! - `BLOCKFALL_COLS`: grid width (default 10)
//! - `BLOCKFALL_TICK_MS`: gravity interval in milliseconds (default 500)
//!
//! Unset or blank variables keep the default. Values are read once when a
//! session is built; the engine never watches them afterwards.

use std::env;
use std::str::FromStr;

use thiserror::Error;

use crate::core::{ConfigError, EngineConfig};

pub const ROWS_VAR: &str = "BLOCKFALL_ROWS";
pub const COLS_VAR: &str = "BLOCKFALL_COLS";
pub const TICK_MS_VAR: &str = "BLOCKFALL_TICK_MS";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvError {
    #[error("{var}: invalid value {value:?}")]
    Invalid { var: &'static str, value: String },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Build an [`EngineConfig`] from the process environment.
pub fn config_from_env() -> Result<EngineConfig, EnvError> {
    config_from_lookup(|name| env::var(name).ok())
}

/// Build an [`EngineConfig`] from an arbitrary variable lookup.
pub fn config_from_lookup<F>(lookup: F) -> Result<EngineConfig, EnvError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = EngineConfig::default();
    if let Some(rows) = read_var(&lookup, ROWS_VAR)? {
        config.rows = rows;
    }
    if let Some(cols) = read_var(&lookup, COLS_VAR)? {
        config.cols = cols;
    }
    if let Some(tick_ms) = read_var(&lookup, TICK_MS_VAR)? {
        config.tick_ms = tick_ms;
    }
    config.validate()?;
    Ok(config)
}

fn read_var<F, T>(lookup: &F, var: &'static str) -> Result<Option<T>, EnvError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let Some(raw) = lookup(var) else {
        return Ok(None);
    };
    let value = raw.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value.parse().map(Some).map_err(|_| EnvError::Invalid {
        var,
        value: value.to_string(),
    })
}

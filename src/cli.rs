//! Command line handling for the headless runner.

use anyhow::{anyhow, Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::{EngineConfig, GameSnapshot};
use crate::types::GameAction;

pub const DEFAULT_TICKS: u64 = 200;

pub const USAGE: &str = "usage: blockfall [--rows N] [--cols N] [--tick-ms N] [--seed N] \
[--ticks N] [--script a,b,c] [--json] [--realtime]";

const PLAYER_ACTIONS: [GameAction; 5] = [
    GameAction::MoveLeft,
    GameAction::MoveRight,
    GameAction::SoftDescend,
    GameAction::RotateCw,
    GameAction::RotateCcw,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub engine: EngineConfig,
    pub seed: u64,
    pub ticks: u64,
    /// Actions applied round-robin, one before each tick
    pub script: Option<Vec<GameAction>>,
    pub json: bool,
    pub realtime: bool,
}

impl RunConfig {
    pub fn new(engine: EngineConfig) -> Self {
        Self {
            engine,
            seed: 1,
            ticks: DEFAULT_TICKS,
            script: None,
            json: false,
            realtime: false,
        }
    }
}

/// Parse runner arguments (without the program name) on top of `base`,
/// which usually comes from the environment.
///
/// Returns `Ok(None)` when help was requested.
pub fn parse_args(args: &[String], base: EngineConfig) -> Result<Option<RunConfig>> {
    let mut config = RunConfig::new(base);
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => return Ok(None),
            "--rows" => config.engine.rows = parse_value(args, &mut i)?,
            "--cols" => config.engine.cols = parse_value(args, &mut i)?,
            "--tick-ms" => config.engine.tick_ms = parse_value(args, &mut i)?,
            "--seed" => config.seed = parse_value(args, &mut i)?,
            "--ticks" => config.ticks = parse_value(args, &mut i)?,
            "--script" => {
                let v = take_value(args, &mut i)?;
                config.script = Some(parse_script(v)?);
            }
            "--json" => config.json = true,
            "--realtime" => config.realtime = true,
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }

    config
        .engine
        .validate()
        .context("invalid engine configuration")?;
    Ok(Some(config))
}

fn take_value<'a>(args: &'a [String], i: &mut usize) -> Result<&'a str> {
    let flag = &args[*i];
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("missing value for {}", flag))
}

fn parse_value<T: std::str::FromStr>(args: &[String], i: &mut usize) -> Result<T> {
    let flag = args[*i].clone();
    let v = take_value(args, i)?;
    v.parse::<T>()
        .map_err(|_| anyhow!("invalid {} value: {}", flag, v))
}

/// Parse a comma separated list of action names.
pub fn parse_script(s: &str) -> Result<Vec<GameAction>> {
    let actions = s
        .split(',')
        .filter(|part| !part.trim().is_empty())
        .map(|part| {
            GameAction::from_str(part)
                .ok_or_else(|| anyhow!("unknown action in script: {}", part.trim()))
        })
        .collect::<Result<Vec<_>>>()?;
    if actions.is_empty() {
        return Err(anyhow!("script is empty"));
    }
    Ok(actions)
}

/// Source of the action applied before each tick.
#[derive(Debug, Clone)]
pub enum ActionSource {
    Script { actions: Vec<GameAction>, next: usize },
    Random(StdRng),
}

impl ActionSource {
    /// A scripted source, or player commands drawn from `seed`.
    pub fn new(script: Option<Vec<GameAction>>, seed: u64) -> Self {
        match script {
            Some(actions) if !actions.is_empty() => ActionSource::Script { actions, next: 0 },
            _ => ActionSource::Random(StdRng::seed_from_u64(seed ^ 0x5eed)),
        }
    }

    pub fn next_action(&mut self) -> GameAction {
        match self {
            ActionSource::Script { actions, next } => {
                let action = actions[*next % actions.len()];
                *next += 1;
                action
            }
            ActionSource::Random(rng) => PLAYER_ACTIONS[rng.gen_range(0..PLAYER_ACTIONS.len())],
        }
    }
}

/// One-line summary of the counters in `snap`.
pub fn stats_line(snap: &GameSnapshot) -> String {
    format!(
        "status {} ticks {} spawned {} locked {} rows {}",
        snap.status.as_str(),
        snap.stats.ticks,
        snap.stats.pieces_spawned,
        snap.stats.pieces_locked,
        snap.stats.rows_cleared
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_without_arguments() {
        let config = parse_args(&[], EngineConfig::default()).unwrap().unwrap();
        assert_eq!(config, RunConfig::new(EngineConfig::default()));
        assert_eq!(config.ticks, 200);
    }

    #[test]
    fn flags_override_base_config() {
        let base = EngineConfig::new(30, 12, 100).unwrap();
        let config = parse_args(
            &args(&["--rows", "8", "--tick-ms", "20", "--seed", "9", "--json"]),
            base,
        )
        .unwrap()
        .unwrap();
        assert_eq!(config.engine.rows, 8);
        assert_eq!(config.engine.cols, 12);
        assert_eq!(config.engine.tick_ms, 20);
        assert_eq!(config.seed, 9);
        assert!(config.json);
        assert!(!config.realtime);
    }

    #[test]
    fn help_returns_none() {
        assert!(parse_args(&args(&["--help"]), EngineConfig::default())
            .unwrap()
            .is_none());
    }

    #[test]
    fn missing_and_invalid_values_are_errors() {
        let err = parse_args(&args(&["--rows"]), EngineConfig::default()).unwrap_err();
        assert!(err.to_string().contains("missing value for --rows"));

        let err = parse_args(&args(&["--ticks", "many"]), EngineConfig::default()).unwrap_err();
        assert!(err.to_string().contains("invalid --ticks value"));

        let err = parse_args(&args(&["--bogus"]), EngineConfig::default()).unwrap_err();
        assert!(err.to_string().contains("unknown argument"));
    }

    #[test]
    fn zero_cols_is_rejected() {
        assert!(parse_args(&args(&["--cols", "0"]), EngineConfig::default()).is_err());
    }

    #[test]
    fn script_parses_names_and_aliases() {
        let script = parse_script("left, cw,softDescend").unwrap();
        assert_eq!(
            script,
            vec![
                GameAction::MoveLeft,
                GameAction::RotateCw,
                GameAction::SoftDescend
            ]
        );
        assert!(parse_script("left,jump").is_err());
        assert!(parse_script(" , ").is_err());
    }

    #[test]
    fn script_source_cycles() {
        let mut source = ActionSource::new(
            Some(vec![GameAction::MoveLeft, GameAction::RotateCcw]),
            1,
        );
        assert_eq!(source.next_action(), GameAction::MoveLeft);
        assert_eq!(source.next_action(), GameAction::RotateCcw);
        assert_eq!(source.next_action(), GameAction::MoveLeft);
    }

    #[test]
    fn random_source_only_yields_player_commands() {
        let mut a = ActionSource::new(None, 3);
        let mut b = ActionSource::new(None, 3);
        for _ in 0..50 {
            let action = a.next_action();
            assert!(action.is_player_command());
            assert_eq!(action, b.next_action());
        }
    }
}

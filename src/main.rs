//! Headless blockfall runner (default binary).
//!
//! Plays one game with scripted or seeded-random commands, one command per
//! gravity tick, and prints the final board and counters. Configuration comes
//! from `BLOCKFALL_*` environment variables, overridden by flags.

use std::thread;
use std::time::Instant;

use anyhow::{Context, Result};
use log::info;

use blockfall::cli::{parse_args, stats_line, ActionSource, RunConfig, USAGE};
use blockfall::engine::{config_from_env, Session};
use blockfall::types::{GameAction, Status};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let base = config_from_env().context("reading BLOCKFALL_* environment")?;
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(config) = parse_args(&args, base)? else {
        println!("{}", USAGE);
        return Ok(());
    };

    run(config)
}

fn run(config: RunConfig) -> Result<()> {
    let mut session =
        Session::with_seed(config.engine, config.seed).context("creating game session")?;
    session.apply(GameAction::Reset);
    info!(
        "running {} ticks on {}x{} (seed {})",
        config.ticks, config.engine.rows, config.engine.cols, config.seed
    );

    let mut source = ActionSource::new(config.script.clone(), config.seed);
    let mut last = Instant::now();
    let mut ticks = 0u64;
    while ticks < config.ticks && session.status() == Status::Running {
        session.apply(source.next_action());

        if config.realtime {
            thread::sleep(session.until_next_tick());
            let now = Instant::now();
            let remaining = u32::try_from(config.ticks - ticks).unwrap_or(u32::MAX);
            ticks += u64::from(session.advance_at_most(now - last, remaining));
            last = now;
        } else {
            session.tick();
            ticks += 1;
        }
    }

    let snap = session.snapshot();
    if config.json {
        println!("{}", serde_json::to_string_pretty(&snap)?);
    } else {
        print!("{}", snap.to_text());
        println!("{}", stats_line(&snap));
    }
    Ok(())
}

//! Blockfall (workspace facade crate).
//!
//! This package exposes `blockfall::{types,core,engine}` while the
//! implementation lives in dedicated crates under `crates/`, plus the argument
//! handling of the headless `blockfall` runner.

pub mod cli;

pub use blockfall_core as core;
pub use blockfall_engine as engine;
pub use blockfall_types as types;

//! Classic terminal Tetris (workspace facade crate).
//!
//! The rules engine, key mapping and renderer live in dedicated crates under
//! `crates/` and are re-exported here as `tetris_classic::{core,input,term,types}`.
//! This package adds the host-side glue: environment configuration, high score
//! persistence and log setup.

pub mod config;
pub mod highscore;
pub mod logging;

pub use tetris_classic_core as core;
pub use tetris_classic_input as input;
pub use tetris_classic_term as term;
pub use tetris_classic_types as types;

pub use config::HostConfig;
pub use highscore::HighScoreStore;

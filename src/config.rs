//! Host configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::types::TICK_MS;

/// File name used when `TETRIS_HIGHSCORE_FILE` is not set
pub const HIGHSCORE_FILE_NAME: &str = "tetris_highscore.txt";

/// Host configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub highscore_path: PathBuf,
    pub seed: u32,
    pub log_path: Option<PathBuf>,
    pub tick_ms: u32,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            highscore_path: default_highscore_path(env::var_os("HOME").map(PathBuf::from)),
            seed: clock_seed(),
            log_path: None,
            tick_ms: TICK_MS,
        }
    }
}

impl HostConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an explicit variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let highscore_path = non_empty("TETRIS_HIGHSCORE_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| default_highscore_path(non_empty("HOME").map(PathBuf::from)));

        let seed = non_empty("TETRIS_SEED")
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(clock_seed);

        let log_path = non_empty("TETRIS_LOG_PATH").map(PathBuf::from);

        let tick_ms = non_empty("TETRIS_TICK_MS")
            .and_then(|s| s.parse().ok())
            .filter(|&ms| ms > 0)
            .unwrap_or(TICK_MS);

        Self {
            highscore_path,
            seed,
            log_path,
            tick_ms,
        }
    }

    pub fn tick_duration(&self) -> Duration {
        Duration::from_millis(self.tick_ms as u64)
    }
}

/// `$HOME/tetris_highscore.txt`, or the working directory without a home.
pub fn default_highscore_path(home: Option<PathBuf>) -> PathBuf {
    match home {
        Some(home) => home.join(HIGHSCORE_FILE_NAME),
        None => PathBuf::from(HIGHSCORE_FILE_NAME),
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

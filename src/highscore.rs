//! High score persistence.
//!
//! The file holds a single decimal integer and nothing else. Loading is
//! forgiving (missing or malformed files read as 0); saving reports errors to
//! the caller, which logs them and keeps playing.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::core::EngineEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored high score, or 0 when there is none.
    pub fn load(&self) -> u32 {
        match self.try_load() {
            Ok(Some(score)) => score,
            Ok(None) => 0,
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "ignoring unreadable high score file");
                0
            }
        }
    }

    /// `Ok(None)` when the file does not exist.
    pub fn try_load(&self) -> Result<Option<u32>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("failed to read {}", self.path.display()))
            }
        };

        let score = text
            .trim()
            .parse::<u32>()
            .with_context(|| format!("malformed high score in {}", self.path.display()))?;
        Ok(Some(score))
    }

    pub fn save(&self, score: u32) -> Result<()> {
        fs::write(&self.path, score.to_string())
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        debug!(path = %self.path.display(), score, "saved high score");
        Ok(())
    }

    /// Persist the score carried by a `NewHighScore` event.
    ///
    /// Returns whether anything was written.
    pub fn persist(&self, event: &EngineEvent) -> Result<bool> {
        match *event {
            EngineEvent::NewHighScore(score) => {
                self.save(score)?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

//! Log subscriber setup.
//!
//! The terminal belongs to the renderer, so logs only ever go to a file.
//! Without a log path no subscriber is installed and `tracing` macros are no-ops.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Install a file-writing subscriber filtered by `RUST_LOG` (default `info`).
///
/// Returns false when `log_path` is `None` or a subscriber is already set.
pub fn init(log_path: Option<&Path>) -> Result<bool> {
    let Some(path) = log_path else {
        return Ok(false);
    };

    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    let installed = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init()
        .is_ok();

    Ok(installed)
}

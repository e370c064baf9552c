//! Sending `tracing` output to a log file.

use std::{fs::File, path::Path, sync::Mutex};

use tracing_subscriber::{fmt, EnvFilter};

use crate::{Error, Result};

/// Filter used when `RUST_LOG` isn't set.
pub const DEFAULT_FILTER: &str = "trivia_roguelite=info";

/// Install the global subscriber, writing to `path` (truncated first).
///
/// `RUST_LOG` overrides [`DEFAULT_FILTER`].
pub fn init(path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| Error::Logging(format!("{}: {}", path.display(), e)))?;
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    fmt()
        .with_env_filter(env_filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))?;

    tracing::info!(log = %path.display(), "logging started");
    Ok(())
}

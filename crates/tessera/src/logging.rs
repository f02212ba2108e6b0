//! Structured log setup
//!
//! Logs go to a JSON file next to the configuration so they never mix with
//! the terminal UI. When that directory is unusable the log moves to the
//! system temp directory, so config problems still reach the UI. The
//! subscriber is returned as a [`Dispatch`] and handed to whoever needs it
//! instead of being installed process-wide.

use anyhow::{Context as _, Result};
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tessera_core::config::consts::LOG_FILE;
use tracing::Dispatch;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Log file location for a given configuration file
pub fn log_path_for(config_path: &Path) -> PathBuf {
    config_path.with_file_name(LOG_FILE)
}

/// Log file location used when the preferred one cannot be opened
pub fn fallback_log_path() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE)
}

/// Build the JSON file logger
///
/// Writes to `preferred` when it can be opened and to `fallback` otherwise.
///
/// # Errors
///
/// Returns an error if neither location can be opened or `filter` is not a
/// valid directive.
pub fn init(preferred: Option<&Path>, fallback: &Path, filter: Option<&str>) -> Result<Dispatch> {
    let filter = EnvFilter::try_new(filter.unwrap_or(DEFAULT_FILTER))
        .with_context(|| format!("invalid log filter '{}'", filter.unwrap_or_default()))?;

    let (file, skipped) = match preferred.map(|path| (path, open_log_file(path))) {
        Some((_, Ok(file))) => (file, None),
        Some((path, Err(e))) => (open_log_file(fallback)?, Some((path, e))),
        None => (open_log_file(fallback)?, None),
    };

    let subscriber = tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .finish();
    let dispatch = Dispatch::new(subscriber);

    if let Some((path, e)) = skipped {
        tracing::dispatcher::with_default(&dispatch, || {
            tracing::warn!(
                preferred = %path.display(),
                error = %e,
                "logging to fallback location"
            );
        });
    }

    Ok(dispatch)
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed creating log directory {}", parent.display()))?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed creating logger at {}", path.display()))
}

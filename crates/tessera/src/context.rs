//! Shared context for CLI commands

use anyhow::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};
use tessera_core::config::{Config, load_or_create};
use tessera_core::{Template, TesseraError};
use tracing::Dispatch;

/// Resolved configuration location and logger handle
pub struct Context {
    /// `None` when no `--config` was given and the home directory is unknown
    pub config_path: Option<PathBuf>,
    pub dispatch: Dispatch,
    pub verbose: bool,
}

impl Context {
    pub fn new(config_path: Option<PathBuf>, dispatch: Dispatch, verbose: bool) -> Self {
        Self {
            config_path,
            dispatch,
            verbose,
        }
    }

    /// Configuration file location
    ///
    /// # Errors
    ///
    /// Returns `HOME_DIR_NOT_FOUND` if no location could be resolved
    pub fn config_path(&self) -> tessera_core::Result<&Path> {
        self.config_path
            .as_deref()
            .ok_or(TesseraError::HomeDirNotFound)
    }

    /// Load templates synchronously
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be located, created, read
    /// or parsed
    pub fn load_config(&self) -> Result<Config> {
        let loaded = load_or_create(self.config_path()?)?;
        if self.verbose {
            if let Some(message) = loaded.message() {
                println!("{} {}", "→".cyan(), message);
            }
        }
        Ok(loaded.config)
    }
}

/// Look up `name` in `config`
pub fn find_template<'a>(config: &'a Config, name: &str) -> Result<&'a Template> {
    config
        .find(name)
        .ok_or_else(|| TesseraError::TemplateNotFound(name.to_string()).into())
}

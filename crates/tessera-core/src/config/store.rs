use super::consts::{APP_DIR, CONFIG_FILE};
use super::model::Config;
use crate::error::{Result, TesseraError};
use std::fs::DirBuilder;
use std::path::{Path, PathBuf};

/// Result of loading the configuration file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedConfig {
    pub config: Config,
    /// The file did not exist and an empty one was written
    pub created: bool,
}

impl LoadedConfig {
    /// User-facing status line for this load, if any
    pub fn message(&self) -> Option<String> {
        if self.created {
            Some(format!("created empty config: {}", self.config.path))
        } else if !self.config.templates.is_empty() {
            Some(format!(
                "Successfully loaded {} templates",
                self.config.templates.len()
            ))
        } else {
            None
        }
    }
}

/// `~/.config/tessera/tessera.json`
pub fn default_config_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(TesseraError::HomeDirNotFound)?;
    Ok(home.join(".config").join(APP_DIR).join(CONFIG_FILE))
}

/// Load the configuration at `path`, creating an empty one if missing
///
/// # Errors
///
/// Returns error if:
/// - The parent directory or the file cannot be created
/// - The file cannot be read or is not valid JSON
///
/// Templates with an invalid or repeated name are skipped, not reported.
pub fn load_or_create(path: &Path) -> Result<LoadedConfig> {
    if !path.exists() {
        let config = Config {
            path: path.display().to_string(),
            templates: Vec::new(),
        };
        create_empty(path, &config)?;
        tracing::info!(path = %path.display(), "created empty config");
        return Ok(LoadedConfig {
            config,
            created: true,
        });
    }

    let mut config = Config::from_file(path)?;
    let skipped = config.drop_invalid();
    if config.path.is_empty() {
        config.path = path.display().to_string();
    }

    tracing::info!(
        path = %path.display(),
        templates = config.templates.len(),
        skipped,
        "loaded config"
    );
    Ok(LoadedConfig {
        config,
        created: false,
    })
}

fn create_empty(path: &Path, config: &Config) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        let mut builder = DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(0o755);
        }
        builder
            .create(parent)
            .map_err(|source| TesseraError::ConfigDirCreate {
                path: parent.to_path_buf(),
                source,
            })?;
    }
    config.to_file(path)
}

//! Configuration file locations

/// Directory under `~/.config` holding tessera files
pub const APP_DIR: &str = "tessera";

/// Template configuration file name
pub const CONFIG_FILE: &str = "tessera.json";

/// Log file name, placed next to the configuration file
pub const LOG_FILE: &str = "tessera.log";

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TesseraError {
    // Materialization errors
    #[error("CURRENT_DIR_UNAVAILABLE: failed to resolve working directory: {0}")]
    CurrentDirUnavailable(#[source] std::io::Error),

    #[error("DIR_CREATE_FAILED: failed to create directory '{path}': {source}")]
    DirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("FILE_CREATE_FAILED: failed to create file '{path}': {source}")]
    FileCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("FILE_WRITE_FAILED: failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Config errors
    #[error("HOME_DIR_NOT_FOUND: could not resolve the home directory")]
    HomeDirNotFound,

    #[error("CONFIG_DIR_CREATE_FAILED: failed to create config directory '{path}': {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CONFIG_CREATE_FAILED: failed to create config file '{path}': {source}")]
    ConfigCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CONFIG_SERIALIZE_FAILED: failed to serialize config for '{path}': {reason}")]
    ConfigSerialize { path: PathBuf, reason: String },

    #[error("CONFIG_READ_FAILED: failed to read config file '{path}': {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CONFIG_PARSE_ERROR: failed to parse '{path}': {reason}")]
    ConfigParse { path: PathBuf, reason: String },

    // Template errors
    #[error("TEMPLATE_INVALID: {0}")]
    TemplateInvalid(String),

    #[error("TEMPLATE_NOT_FOUND: template '{0}' not found")]
    TemplateNotFound(String),
}

pub type Result<T> = std::result::Result<T, TesseraError>;

//! Persisted template configuration

pub mod consts;
mod model;
mod store;

pub use model::Config;
pub use store::{default_config_path, load_or_create, LoadedConfig};

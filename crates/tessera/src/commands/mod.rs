//! CLI command implementations

pub mod interactive;
pub mod list;
pub mod preview;
pub mod spawn;

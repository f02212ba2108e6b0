// Core modules
pub mod config;
pub mod error;
pub mod materialize;
pub mod path;
pub mod preview;
pub mod template;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, TesseraError};
pub use materialize::{materialize, materialize_in, ProgressEvent, ProgressSink};
pub use preview::{frame, generate_preview, render_preview, BoxStyle};
pub use template::{File, RepeatedGroup, Template};

use std::fmt;
use std::path::PathBuf;

/// Progress reported while a template is materialized
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    /// Emitted once before any filesystem work
    Started { dir: PathBuf, repetitions: usize },
    /// A file was created, path relative to the base directory
    CreatedFile { path: PathBuf },
    /// The run aborted; always the last event when present
    Failed { message: String },
}

impl ProgressEvent {
    pub fn is_failure(&self) -> bool {
        matches!(self, ProgressEvent::Failed { .. })
    }
}

impl fmt::Display for ProgressEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgressEvent::Started { dir, repetitions } => write!(
                f,
                "spawning template at {} with {} repeated parts",
                dir.display(),
                repetitions
            ),
            ProgressEvent::CreatedFile { path } => write!(f, "created file: {}", path.display()),
            ProgressEvent::Failed { message } => write!(f, "Error: {}", message),
        }
    }
}

/// Consumer of progress events
pub trait ProgressSink {
    fn emit(&mut self, event: ProgressEvent);
}

impl<F> ProgressSink for F
where
    F: FnMut(ProgressEvent),
{
    fn emit(&mut self, event: ProgressEvent) {
        self(event)
    }
}

impl ProgressSink for Vec<ProgressEvent> {
    fn emit(&mut self, event: ProgressEvent) {
        self.push(event);
    }
}

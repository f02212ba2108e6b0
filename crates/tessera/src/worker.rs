//! Background jobs for long-running operations
//!
//! Each job runs on tokio's blocking pool under the dispatch it was given
//! and reports back through a bounded channel. The channel closes when the
//! job ends, successfully or not.

use std::path::PathBuf;
use tessera_core::config::{LoadedConfig, load_or_create};
use tessera_core::{ProgressEvent, Template, materialize_in};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::Dispatch;

/// Capacity of the progress channel
pub const EVENT_BUFFER: usize = 16;

/// A running materialization
pub struct SpawnJob {
    pub events: mpsc::Receiver<ProgressEvent>,
    pub handle: JoinHandle<tessera_core::Result<()>>,
}

impl SpawnJob {
    /// Wait for the job, flattening a panicked or cancelled task into a message
    pub async fn finish(self) -> Result<(), String> {
        match self.handle.await {
            Ok(result) => result.map_err(|e| e.to_string()),
            Err(e) => Err(format!("worker failed: {}", e)),
        }
    }
}

/// Materialize `template` under `base` on a background task
///
/// Must be called from within a tokio runtime.
pub fn spawn_template(
    template: Template,
    repetitions: usize,
    base: PathBuf,
    dispatch: Dispatch,
) -> SpawnJob {
    let (tx, events) = mpsc::channel(EVENT_BUFFER);
    let handle = tokio::task::spawn_blocking(move || {
        tracing::dispatcher::with_default(&dispatch, || {
            let mut sink = |event: ProgressEvent| {
                // Receiver gone: nobody is listening, keep going to completion.
                let _ = tx.blocking_send(event);
            };
            materialize_in(&template, repetitions, &base, &mut sink)
        })
    });
    SpawnJob { events, handle }
}

/// Load the configuration file on a background task
pub fn load_config(
    path: PathBuf,
    dispatch: Dispatch,
) -> JoinHandle<tessera_core::Result<LoadedConfig>> {
    tokio::task::spawn_blocking(move || {
        tracing::dispatcher::with_default(&dispatch, || load_or_create(&path))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tessera_core::{File, RepeatedGroup};
    use tessera_testkit::{fixtures, list_tree, temp_dir_in_workspace};

    fn template() -> Template {
        Template::new("go").with_repeated(
            RepeatedGroup::new("pkg-$n")
                .with_file(File::new("mod", "go").with_lines(["package main"])),
        )
    }

    #[tokio::test]
    async fn test_spawn_streams_events_then_closes() {
        let temp = temp_dir_in_workspace();
        let mut job = spawn_template(
            template(),
            3,
            temp.path().to_path_buf(),
            Dispatch::none(),
        );

        let mut lines = Vec::new();
        while let Some(event) = job.events.recv().await {
            lines.push(event.to_string());
        }

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("spawning template at"));
        assert!(lines[3].starts_with("created file: pkg-3"));
        assert!(job.finish().await.is_ok());
        assert_eq!(list_tree(temp.path()).len(), 6);
    }

    #[tokio::test]
    async fn test_spawn_error_is_last_event() {
        let temp = temp_dir_in_workspace();
        fs::write(temp.path().join("pkg-2"), "").unwrap();
        let mut job = spawn_template(
            template(),
            3,
            temp.path().to_path_buf(),
            Dispatch::none(),
        );

        let mut events = Vec::new();
        while let Some(event) = job.events.recv().await {
            events.push(event);
        }

        assert!(events.last().unwrap().is_failure());
        let err = job.finish().await.unwrap_err();
        assert!(err.starts_with("DIR_CREATE_FAILED"));
        assert!(temp.path().join("pkg-1/mod.go").is_file());
    }

    #[tokio::test]
    async fn test_load_config_in_background() {
        let temp = temp_dir_in_workspace();
        let path = temp.path().join("tessera.json");
        fixtures::write_sample_config(&path).unwrap();

        let loaded = load_config(path, Dispatch::none()).await.unwrap().unwrap();
        assert_eq!(loaded.config.templates.len(), 2);
    }
}

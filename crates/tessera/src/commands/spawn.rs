//! Non-interactive materialization

use crate::context::{Context, find_template};
use crate::output::print_event;
use crate::worker;
use anyhow::{Result, anyhow};
use std::env;
use std::path::PathBuf;

/// Materialize `name` with `count` repetitions under `dir` (default: cwd)
///
/// Progress is streamed from the worker and printed as it arrives. The
/// failure itself is left to the caller to print.
pub fn run(ctx: &Context, name: &str, count: usize, dir: Option<PathBuf>) -> Result<()> {
    let config = ctx.load_config()?;
    let template = find_template(&config, name)?.clone();
    let base = match dir {
        Some(dir) => dir,
        None => env::current_dir()?,
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        let mut job = worker::spawn_template(template, count, base, ctx.dispatch.clone());
        while let Some(event) = job.events.recv().await {
            if !event.is_failure() {
                print_event(&event)?;
            }
        }
        job.finish().await.map_err(|message| anyhow!(message))?;
        Ok::<(), anyhow::Error>(())
    })
}

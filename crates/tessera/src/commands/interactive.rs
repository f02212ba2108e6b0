//! Interactive UI entry point (no subcommand)

use crate::context::Context;
use crate::output;
use crate::tui::{self, App, Theme};
use crate::worker;
use anyhow::Result;
use std::env;

pub fn run(ctx: &Context) -> Result<()> {
    let base = env::current_dir()?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let app = runtime.block_on(async {
        let loaded = match ctx.config_path() {
            Ok(path) => worker::load_config(path.to_path_buf(), ctx.dispatch.clone())
                .await
                .map_err(|e| anyhow::anyhow!("config loader failed: {}", e))?,
            Err(e) => Err(e),
        };

        let mut app = App::new(loaded);
        tui::run(&mut app, &Theme::default(), base, ctx.dispatch.clone()).await?;
        Ok::<App, anyhow::Error>(app)
    })?;

    output::print_log(&app.log)?;
    tracing::info!(events = app.log.len(), "session ended");
    Ok(())
}

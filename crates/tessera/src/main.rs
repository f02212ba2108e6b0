mod cli;
mod commands;
mod context;
mod logging;
mod output;
mod tui;
mod worker;

use clap::Parser;
use cli::{Cli, Commands};
use context::Context;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = match cli.config {
        Some(path) => Ok(path),
        None => tessera_core::config::default_config_path(),
    };

    // Logger failure is fatal.
    let log_path = config_path.as_deref().ok().map(logging::log_path_for);
    let dispatch = logging::init(
        log_path.as_deref(),
        &logging::fallback_log_path(),
        cli.log_level.as_deref(),
    )?;
    let _guard = tracing::dispatcher::set_default(&dispatch);

    let config_path = match config_path {
        Ok(path) => {
            tracing::info!(config = %path.display(), "starting tessera");
            Some(path)
        }
        Err(e) => {
            tracing::warn!(error = %e, "starting tessera without a config location");
            None
        }
    };

    let ctx = Context::new(config_path, dispatch, cli.verbose);

    match cli.command {
        None => commands::interactive::run(&ctx),
        Some(Commands::List { json }) => commands::list::run(&ctx, json),
        Some(Commands::Preview { name }) => commands::preview::run(&ctx, &name),
        Some(Commands::Spawn { name, count, dir }) => commands::spawn::run(&ctx, &name, count, dir),
    }
}

//! CLI command structure using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tessera")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Start the interactive UI when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Template configuration file (default: ~/.config/tessera/tessera.json)
    #[arg(long, global = true, env = "TESSERA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log filter directive, e.g. "debug" or "tessera_core=trace"
    #[arg(long, global = true, env = "TESSERA_LOG")]
    pub log_level: Option<String>,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List configured templates
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show what a template would create
    Preview {
        /// Template name
        name: String,
    },

    /// Materialize a template
    Spawn {
        /// Template name
        name: String,

        /// Number of repeated parts
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// Target directory (default: current directory)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

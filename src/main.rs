//! genshard CLI - plans sharded, per-file code generation commands
//!
//! Usage: genshard <COMMAND>
//!
//! Commands:
//!   plan    Plan every (or the selected) module and print its rules
//!   check   Plan without printing rules
//!   expand  Expand an output template for a list of paths

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

/// Default log level for a `-v` count; `RUST_LOG` wins when set.
fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "genshard=warn",
        1 => "genshard=info",
        2 => "genshard=debug",
        _ => "genshard=trace",
    }
}

fn init_tracing(verbose: u8) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbose).into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Plan { args } => commands::cmd_plan(&args, cli.json, cli.verbose),
        Commands::Check { args } => commands::cmd_check(&args, cli.json, cli.verbose),
        Commands::Expand {
            template,
            package,
            paths,
        } => commands::cmd_expand(&template, package.as_deref(), &paths, cli.json),
    }
}

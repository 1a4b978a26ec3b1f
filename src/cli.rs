use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// genshard - plans sharded, per-file code generation commands
#[derive(Parser, Debug)]
#[command(name = "genshard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Manifest selection and `[build]` overrides shared by `plan` and `check`
#[derive(Args, Debug, Clone)]
pub struct ManifestArgs {
    /// Path to the manifest
    #[arg(short, long, default_value = "genshard.toml")]
    pub manifest: PathBuf,

    /// Plan only this module (repeatable)
    #[arg(long = "module", value_name = "NAME")]
    pub modules: Vec<String>,

    /// Inputs per shard
    #[arg(long, value_name = "N")]
    pub shard_size: Option<usize>,

    /// Root directory for generated files
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<String>,

    /// Replace rules of modules with missing dependencies by failing ones
    #[arg(long)]
    pub allow_missing: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Plan every (or the selected) module and print its rules
    Plan {
        #[command(flatten)]
        args: ManifestArgs,
    },

    /// Plan without printing rules; exits non-zero on any planning error
    Check {
        #[command(flatten)]
        args: ManifestArgs,
    },

    /// Expand an output template for each path and report collisions
    Expand {
        /// Output template, e.g. '$(SRC:BASE).c'
        #[arg(short, long)]
        template: String,

        /// Package directory the paths are relative to
        #[arg(short, long, value_name = "DIR")]
        package: Option<String>,

        /// Source paths
        #[arg(required = true)]
        paths: Vec<String>,
    },
}

// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod display;
pub mod handlers;
pub mod menu;

pub use commands::{CliCommand, GenerateArgs};

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate passwords and rate their strength", long_about = None)]
pub struct Args {
    /// Use JSON for input/output (for scripting)
    #[arg(long)]
    pub json: bool,

    /// Seed a deterministic generator (reproducible, not for real secrets)
    #[arg(long, env = "QENQEY_SEED")]
    pub seed: Option<u64>,

    /// Command to execute (defaults to the interactive menu)
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

//! Command-line interface for strictly_noughts.

use clap::Parser;
use std::path::PathBuf;

/// Strictly Noughts - play X against the computer
#[derive(Parser, Debug)]
#[command(name = "strictly_noughts")]
#[command(about = "Play noughts and crosses against a heuristic computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (ignored if missing)
    #[arg(short, long, default_value = "strictly_noughts.toml")]
    pub config: PathBuf,

    /// Computer thinking delay in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Seed for the computer's corner and edge tie-breaks
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print render updates as JSON lines instead of a board
    #[arg(long)]
    pub json: bool,
}

//! Matchup Counter Binary
//!
//! Reads one head-to-head matchup per line and reports how often the
//! first hand wins.

use clap::Parser;
use pokerhands::cli::Args;

fn main() -> anyhow::Result<()> {
    pokerhands::cli::run(Args::parse())
}

//! Jobmatch - Entry Point

// Force-link jobmatch-providers so its registry entries are present
extern crate jobmatch_providers;

use clap::Parser;
use jobmatch::cli::{Cli, run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    run(Cli::parse()).await
}

//! CLI entry point for kolam pattern generation and analysis

use clap::Parser;
use kolam::io::cli::{Cli, CommandProcessor};
use tracing_subscriber::EnvFilter;

fn main() -> kolam::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let processor = CommandProcessor::new(cli);
    processor.process()
}

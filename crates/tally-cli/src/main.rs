//! Tally CLI entry point.

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use tally_cli::cli::Cli;
use tally_cli::commands;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level().to_string()));

    fmt().with_env_filter(filter).with_target(false).init();

    let catalog_path = cli.catalog.clone();
    let state_dir = cli.state_dir();

    if let Err(e) = commands::execute(cli.command, &catalog_path, &state_dir) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

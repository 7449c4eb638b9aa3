//! Command-line interface definition using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tally - Checklist progress dashboard
#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to the catalog JSON file
    #[arg(short, long, env = "TALLY_CATALOG", default_value = "checklist.json")]
    pub catalog: PathBuf,

    /// Path to state directory
    #[arg(short, long, env = "TALLY_STATE_DIR")]
    pub state_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show overall and per-tier progress
    Status,

    /// List checklist items with their state
    List {
        /// Restrict to one tier (recommended, optional, advanced)
        #[arg(short, long)]
        tier: Option<String>,
    },

    /// Mark an item as completed
    Check {
        /// Item id or display text
        #[arg(required = true)]
        item: String,
    },

    /// Clear an item's completed flag
    Uncheck {
        /// Item id or display text
        #[arg(required = true)]
        item: String,
    },

    /// Exclude an item from the eligible count
    Ignore {
        /// Item id or display text
        #[arg(required = true)]
        item: String,
    },

    /// Put an item back in the eligible count
    Unignore {
        /// Item id or display text
        #[arg(required = true)]
        item: String,
    },

    /// Print the radar dataset as JSON
    Radar,

    /// Run the HTTP API server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind to
        #[arg(short, long, default_value_t = 8130)]
        port: u16,
    },
}

impl Cli {
    /// Returns the state directory path, using default if not specified.
    pub fn state_dir(&self) -> PathBuf {
        self.state_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .map(|d| d.join("tally"))
                .unwrap_or_else(|| PathBuf::from(".tally"))
        })
    }

    /// Returns the log level based on verbosity.
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}

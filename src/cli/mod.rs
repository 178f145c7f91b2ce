//! CLI argument parsing for searchlab
//!
//! Uses clap for argument parsing. The graph, endpoints, and depth
//! limits of the demonstration are fixed; only output and logging
//! behavior is adjustable.

pub mod output;

use clap::Parser;

pub use output::OutputFormat;

/// Searchlab - uninformed graph-search demonstration CLI
#[derive(Parser, Debug)]
#[command(name = "searchlab")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,

    /// Explicit log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

//! Command-line configuration for the batch classifier.

use std::path::PathBuf;

use clap::Parser;

/// Classify windows of accelerometer statistics as tremor / no tremor
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "tremor-classify")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// CSV file with one row of 32 feature columns per window
    #[arg(short, long)]
    pub input: PathBuf,

    /// Where to write predictions (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Log the decision path of every row
    #[arg(long)]
    pub explain: bool,

    /// Enable debug output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Log filter used when `RUST_LOG` is not set.
    pub fn default_log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}

//! CLI argument parsing using clap
//!
//! The search itself takes no runtime options; the command line only controls
//! diagnostics.

use clap::Parser;

/// Magic square - parallel random search for a 3x3 magic square of squares
#[derive(Parser, Debug, Default)]
#[command(name = "magicsquare")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Print diagnostic (debug level) logs to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Log filter directive for the tracing subscriber
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

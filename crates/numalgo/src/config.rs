//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// numalgo — run fixture suites for exponentiation, Fibonacci and prime sieve variants.
#[derive(Parser, Debug)]
#[command(name = "numalgo", version, about)]
pub struct AppConfig {
    /// Directory holding the `{prefix}_test.{index}.in/.out` fixtures.
    #[arg(long, default_value = "testdata", env = "NUMALGO_FIXTURES")]
    pub fixtures: PathBuf,

    /// Suites to run: all, power, fibonacci, primes, or family:variant.
    #[arg(short, long, default_value = "all")]
    pub suite: String,

    /// Report format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print every variant's result on its canonical input before the suites.
    #[arg(long)]
    pub showcase: bool,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode (only the summary line).
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

/// How suite reports are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

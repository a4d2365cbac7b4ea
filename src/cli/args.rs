//! Command line argument parsing for the porter2 CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// porter2 - English word stemming with the Porter2 algorithm
#[derive(Parser, Debug, Clone)]
#[command(name = "porter2")]
#[command(about = "English word stemming with the Porter2 algorithm")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct Porter2Args {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Stemmer configuration file (JSON)
    #[arg(long, value_name = "CONFIG_FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Stem stop words instead of passing them through
    #[arg(long, global = true)]
    pub stem_stop_words: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl Porter2Args {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// The tracing filter directive matching the verbosity level.
    pub fn log_directive(&self) -> &'static str {
        match self.verbosity() {
            0 | 1 => "error",
            2 => "info",
            3 => "debug",
            _ => "trace",
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Stem words given as arguments, or read from standard input
    Stem(StemArgs),

    /// Show how a single word moves through every stemming step
    Explain(ExplainArgs),

    /// Check stems against a file of `word expected` pairs
    Verify(VerifyArgs),
}

/// Arguments for stemming words
#[derive(Parser, Debug, Clone)]
pub struct StemArgs {
    /// Words to stem; standard input is read when none are given
    #[arg(value_name = "WORDS")]
    pub words: Vec<String>,
}

/// Arguments for explaining a stem
#[derive(Parser, Debug, Clone)]
pub struct ExplainArgs {
    /// The word to explain
    #[arg(value_name = "WORD")]
    pub word: String,
}

/// Arguments for verifying a vocabulary
#[derive(Parser, Debug, Clone)]
pub struct VerifyArgs {
    /// File with one `word expected` pair per line
    #[arg(value_name = "VOCABULARY_FILE")]
    pub vocabulary: PathBuf,

    /// Maximum number of mismatches to report
    #[arg(long, default_value = "20")]
    pub max_failures: usize,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

//! Command line argument parsing for the stemma CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Stemma - English suffix-stripping stemmer
#[derive(Parser, Debug, Clone)]
#[command(name = "stemma")]
#[command(about = "Reduce English words to their stems")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct StemmaArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Stemmer configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "STEMMA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Use the classic rule set without irregular forms
    #[arg(long)]
    pub classic: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl StemmaArgs {
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
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Stem the given words
    Stem(StemArgs),

    /// Stem every word of a text file
    File(FileArgs),

    /// Show how a word is stemmed, stage by stage
    Explain(ExplainArgs),

    /// List the irregular forms in effect
    Irregulars,
}

/// Arguments for stemming words
#[derive(Parser, Debug, Clone)]
pub struct StemArgs {
    /// Words to stem
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,
}

/// Arguments for stemming a file
#[derive(Parser, Debug, Clone)]
pub struct FileArgs {
    /// Path to a text file
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Stem words on all cores
    #[arg(short, long)]
    pub parallel: bool,

    /// Maximum number of distinct words to list
    #[arg(short, long, default_value = "50")]
    pub limit: usize,
}

/// Arguments for explaining a word
#[derive(Parser, Debug, Clone)]
pub struct ExplainArgs {
    /// Word to explain
    #[arg(value_name = "WORD")]
    pub word: String,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

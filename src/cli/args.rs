//! Command line argument parsing for the lexiscan CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// lexiscan - scan a file tree for words missing from a dictionary
#[derive(Parser, Debug, Clone)]
#[command(name = "lexiscan")]
#[command(about = "Inspects a file tree for unknown words")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "lexiscan Contributors")]
#[command(long_about = None)]
pub struct LexiscanArgs {
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

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LexiscanArgs {
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
    /// Inspect a file tree for unknown words
    Inspect(InspectArgs),

    /// Classify individual tokens against the dictionary
    Check(CheckArgs),
}

/// Arguments for inspecting a file tree
#[derive(Parser, Debug, Clone)]
pub struct InspectArgs {
    /// The root of the tree lexiscan will walk
    #[arg(value_name = "ROOT")]
    pub root: PathBuf,

    /// Dictionary file with one word per line
    #[arg(short, long, value_name = "DICTIONARY", default_value = "dictionary/english.txt")]
    pub dictionary: PathBuf,

    /// Inspect files in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Skip reports with no issues and no warnings
    #[arg(long)]
    pub only_issues: bool,
}

/// Arguments for checking individual tokens
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Tokens to classify
    #[arg(value_name = "WORDS", required = true)]
    pub words: Vec<String>,

    /// Dictionary file with one word per line
    #[arg(short, long, value_name = "DICTIONARY", default_value = "dictionary/english.txt")]
    pub dictionary: PathBuf,
}

/// Output formats available in the CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text output
    Human,
    /// JSON output
    Json,
}

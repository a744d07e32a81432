//! CLI argument definitions

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scrambled-matcher")]
#[command(about = "Count dictionary words hidden in text, interior letters scrambled or not")]
#[command(version)]
pub struct Cli {
    /// Custom configuration file path
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan every input line and print one `Case #n: count` line per line
    Scan {
        /// Dictionary file, one word per line
        #[arg(short, long)]
        dictionary: PathBuf,

        /// Input file, one text per line
        #[arg(short, long)]
        input: PathBuf,

        /// Output format
        #[arg(short = 'f', long, default_value = "text")]
        format: OutputFormat,

        /// Skip the size, length and duplicate checks
        #[arg(long)]
        no_validate: bool,

        /// Visit every window even after all entries were found
        #[arg(long)]
        no_early_exit: bool,

        /// Signature cache capacity (0 disables the cache)
        #[arg(long)]
        cache_capacity: Option<usize>,

        /// Add dictionary words from a thread pool
        #[arg(long)]
        parallel: bool,
    },

    /// Check dictionary and input files against the configured constraints
    Validate {
        /// Dictionary file
        #[arg(short, long)]
        dictionary: PathBuf,

        /// Input file
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Write a synthetic dictionary and input file
    Generate {
        /// Dictionary file to write
        #[arg(short, long)]
        dictionary: PathBuf,

        /// Input file to write
        #[arg(short, long)]
        input: PathBuf,

        /// Random seed
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Number of dictionary words
        #[arg(short = 'w', long, default_value = "100")]
        words: usize,

        /// Number of input lines
        #[arg(short = 'l', long, default_value = "100")]
        lines: usize,

        /// Build every word from permutations of one base word
        #[arg(long)]
        permutation: bool,
    },

    /// Show or initialize the configuration file
    Config {
        /// Print the effective configuration
        #[arg(long)]
        show: bool,

        /// Write the default configuration if no file exists
        #[arg(long)]
        init: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `Case #n: count` lines
    #[default]
    Text,
    /// One JSON document with a report per line
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

//! scrambled-matcher - count dictionary words hidden in text with scrambled interiors
//!
//! Reads a dictionary and an input file and prints one `Case #n: count` line
//! per input line.

use clap::Parser;
use colored::Colorize;
use std::process;
use tracing::error;

use scrambled_matcher::cli::{commands, logging, Cli};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = commands::execute(cli) {
        error!("{:#}", e);
        eprintln!("{}: {:#}", "Error".red().bold(), e);
        process::exit(1);
    }
}

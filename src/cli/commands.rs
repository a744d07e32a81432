//! CLI command implementations

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::path::Path;
use tracing::{info, warn};

use crate::alphabet::to_symbols;
use crate::corpus::CorpusGenerator;
use crate::matcher::{ScanReport, ScrambledMatcher};
use crate::validation::{validate_dictionary, validate_input_file};

use super::args::{Cli, Commands, OutputFormat};
use super::config::{config_file_path, MatcherConfig};

/// Result of scanning one input line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CaseReport {
    /// 1-based input line number
    pub case: usize,
    /// Scan outcome for the line
    #[serde(flatten)]
    pub report: ScanReport,
}

/// Execute a CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();
    let config = MatcherConfig::load_from(config_path)?;

    match cli.command {
        Commands::Scan {
            dictionary,
            input,
            format,
            no_validate,
            no_early_exit,
            cache_capacity,
            parallel,
        } => {
            let config = config.merge_with_cli(
                cache_capacity,
                no_early_exit.then_some(false),
                parallel.then_some(true),
            );
            cmd_scan(&config, &dictionary, &input, format, !no_validate)
        }
        Commands::Validate { dictionary, input } => {
            cmd_validate(&config, &dictionary, input.as_deref())
        }
        Commands::Generate {
            dictionary,
            input,
            seed,
            words,
            lines,
            permutation,
        } => cmd_generate(&config, &dictionary, &input, seed, words, lines, permutation),
        Commands::Config { show, init } => cmd_config(config_path, &config, show, init),
    }
}

/// Scan command
fn cmd_scan(
    config: &MatcherConfig,
    dictionary: &Path,
    input: &Path,
    format: OutputFormat,
    validate: bool,
) -> Result<()> {
    let cases = scan_files(config, dictionary, input, validate)?;

    match format {
        OutputFormat::Text => {
            for case in &cases {
                println!("Case #{}: {}", case.case, case.report.matches);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&cases)?);
        }
    }

    Ok(())
}

/// Load the dictionary, scan every input line and collect one report per line
pub fn scan_files(
    config: &MatcherConfig,
    dictionary: &Path,
    input: &Path,
    validate: bool,
) -> Result<Vec<CaseReport>> {
    let matcher = load_matcher(config, dictionary, validate)?;
    let lines = load_input(config, input, validate)?;
    let options = config.scan_options();

    lines
        .iter()
        .enumerate()
        .map(|(index, line)| {
            let case = index + 1;
            let report = matcher
                .scan_with(line, options)
                .with_context(|| format!("Failed to scan line {} of {}", case, input.display()))?;
            Ok::<_, anyhow::Error>(CaseReport { case, report })
        })
        .collect()
}

/// Build a matcher from a dictionary file
pub fn load_matcher(
    config: &MatcherConfig,
    path: &Path,
    validate: bool,
) -> Result<ScrambledMatcher> {
    let matcher = config.matcher();

    let words = if validate {
        validate_dictionary(path, &config.constraints)?
    } else {
        read_lines(path)?
            .into_iter()
            .filter(|word| !word.is_empty())
            .collect()
    };

    let result = if config.parallel_import {
        par_add_words(&matcher, &words)
    } else {
        matcher.add_words(&words)
    };
    let added =
        result.with_context(|| format!("Failed to load dictionary {}", path.display()))?;

    info!(path = %path.display(), added, "dictionary loaded");
    Ok(matcher)
}

#[cfg(feature = "parallel")]
fn par_add_words(
    matcher: &ScrambledMatcher,
    words: &[String],
) -> Result<usize, crate::DictionaryError> {
    matcher.par_add_words(words)
}

#[cfg(not(feature = "parallel"))]
fn par_add_words(
    matcher: &ScrambledMatcher,
    words: &[String],
) -> Result<usize, crate::DictionaryError> {
    warn!("parallel import requested but the `parallel` feature is disabled");
    matcher.add_words(words)
}

/// Read the input lines, trimmed
fn load_input(config: &MatcherConfig, path: &Path, validate: bool) -> Result<Vec<String>> {
    if validate {
        Ok(validate_input_file(path, &config.constraints)?)
    } else {
        read_lines(path)
    }
}

fn read_lines(path: &Path) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    Ok(contents.lines().map(|line| line.trim().to_string()).collect())
}

/// Validate command
fn cmd_validate(config: &MatcherConfig, dictionary: &Path, input: Option<&Path>) -> Result<()> {
    let matcher = load_matcher(config, dictionary, true)?;
    let stats = matcher.stats();

    println!("{}", "Dictionary Information".bold().underline());
    println!();
    println!("  Path:    {}", dictionary.display().to_string().cyan());
    println!("  Words:   {}", stats.word_count.to_string().green());
    println!("  Entries: {}", stats.entry_count.to_string().green());
    println!("  Anchors: {}", stats.anchor_count.to_string().green());
    println!(
        "  Lengths: {}",
        stats
            .word_lengths
            .iter()
            .map(|length| length.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );

    if let Some(input) = input {
        let lines = validate_input_file(input, &config.constraints)?;
        for (index, line) in lines.iter().enumerate() {
            to_symbols(line).with_context(|| {
                format!("Invalid text on line {} of {}", index + 1, input.display())
            })?;
        }

        println!();
        println!("{}", "Input Information".bold().underline());
        println!();
        println!("  Path:    {}", input.display().to_string().cyan());
        println!("  Lines:   {}", lines.len().to_string().green());
    }

    println!();
    println!("{}", "All checks passed".green().bold());

    Ok(())
}

/// Generate command
fn cmd_generate(
    config: &MatcherConfig,
    dictionary: &Path,
    input: &Path,
    seed: u64,
    words: usize,
    lines: usize,
    permutation: bool,
) -> Result<()> {
    let constraints = &config.constraints;
    let mut generator = CorpusGenerator::new(seed);

    let (dictionary_words, input_lines) = if permutation {
        let (base, dictionary_words) = generator.permutation_dictionary(constraints);
        let input_lines = generator.permutation_lines(&base, lines, constraints);
        (dictionary_words, input_lines)
    } else {
        let dictionary_words = generator.dictionary(words, constraints);
        let input_lines = generator.input_lines(&dictionary_words, lines, constraints);
        (dictionary_words, input_lines)
    };

    if !permutation && dictionary_words.len() < words.min(constraints.max_dictionary_words) {
        warn!(
            requested = words,
            generated = dictionary_words.len(),
            "word-length bounds leave too few distinct words"
        );
    }

    write_lines(dictionary, &dictionary_words)?;
    write_lines(input, &input_lines)?;

    println!(
        "  Wrote {} words to {}",
        dictionary_words.len().to_string().green(),
        dictionary.display().to_string().cyan()
    );
    println!(
        "  Wrote {} lines to {}",
        input_lines.len().to_string().green(),
        input.display().to_string().cyan()
    );

    Ok(())
}

fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    let mut contents = lines.join("\n");
    contents.push('\n');
    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write file: {}", path.display()))
}

/// Config command
fn cmd_config(
    custom_path: Option<&Path>,
    config: &MatcherConfig,
    show: bool,
    init: bool,
) -> Result<()> {
    let path = config_file_path(custom_path)?;

    if init {
        if path.exists() {
            println!(
                "  Config file already exists at {}",
                path.display().to_string().yellow()
            );
        } else {
            let written = MatcherConfig::default().save_to(Some(&path))?;
            println!("{}", "Config file created".green().bold());
            println!("  Path: {}", written.display().to_string().cyan());
        }
    }

    if show {
        println!("{}", "Effective Configuration".bold().underline());
        println!();
        println!("  Path: {}", path.display().to_string().cyan());
        println!();
        println!("{}", serde_json::to_string_pretty(config)?);
    }

    if !show && !init {
        println!("{}", "Config File Management".bold().underline());
        println!();
        println!("Usage:");
        println!("  scrambled-matcher config --show   Show the effective configuration");
        println!("  scrambled-matcher config --init   Write the default configuration");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_scan_files_reports_each_line() {
        let dir = TempDir::new().unwrap();
        let dictionary = dir.path().join("dictionary.txt");
        let input = dir.path().join("input.txt");
        std::fs::write(&dictionary, "axpaj\napxaj\ndnrbt\npjxdn\nabd\n").unwrap();
        std::fs::write(
            &input,
            "aapxjdnrbtvldptfzbbdbbzxtndrvjblnzjfpvhdhhpxjdnrbt\naapxj\n",
        )
        .unwrap();

        let cases = scan_files(&MatcherConfig::default(), &dictionary, &input, true).unwrap();
        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0].case, 1);
        assert_eq!(cases[0].report.matches, 4);
        assert_eq!(cases[1].report.matches, 2);
    }

    #[test]
    fn test_unvalidated_load_skips_blank_lines() {
        let dir = TempDir::new().unwrap();
        let dictionary = dir.path().join("dictionary.txt");
        std::fs::write(&dictionary, "maps\n\nmaps\n").unwrap();

        let config = MatcherConfig::default();
        assert!(load_matcher(&config, &dictionary, true).is_err());

        let matcher = load_matcher(&config, &dictionary, false).unwrap();
        assert_eq!(matcher.word_count(), 2);
    }
}

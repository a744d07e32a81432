//! Size, length and duplicate checks for dictionary and input files.
//!
//! These checks sit in front of the matcher: they enforce policy bounds that
//! the matching core itself does not care about. Lengths are counted in
//! characters after trimming surrounding whitespace. Symbol membership is not
//! checked here; the matcher rejects out-of-alphabet symbols on its own.
//!
//! # Example
//!
//! ```rust
//! use scrambled_matcher::validation::{validate_dictionary_words, Constraints};
//!
//! let words = validate_dictionary_words(["maps\n", "spam"], &Constraints::default()).unwrap();
//! assert_eq!(words, vec!["maps", "spam"]);
//!
//! assert!(validate_dictionary_words(["maps", "maps"], &Constraints::default()).is_err());
//! ```

mod error;

use std::fs;
use std::path::Path;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use error::{DictionaryConstraintError, InputConstraintError};

/// Default maximum number of dictionary words.
pub const MAX_DICTIONARY_SIZE: usize = 100;
/// Default minimum dictionary word length.
pub const MIN_DICTIONARY_LENGTH: usize = 2;
/// Default maximum dictionary word length.
pub const MAX_DICTIONARY_LENGTH: usize = 20;
/// Default maximum number of input lines.
pub const MAX_INPUT_SIZE: usize = 100;
/// Default minimum input line length.
pub const MIN_INPUT_LENGTH: usize = 2;
/// Default maximum input line length.
pub const MAX_INPUT_LENGTH: usize = 500;

/// Bounds enforced on dictionary and input files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Constraints {
    /// Maximum number of dictionary words.
    pub max_dictionary_words: usize,
    /// Minimum dictionary word length.
    pub min_word_length: usize,
    /// Maximum dictionary word length.
    pub max_word_length: usize,
    /// Maximum number of input lines.
    pub max_input_lines: usize,
    /// Minimum input line length.
    pub min_line_length: usize,
    /// Maximum input line length.
    pub max_line_length: usize,
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            max_dictionary_words: MAX_DICTIONARY_SIZE,
            min_word_length: MIN_DICTIONARY_LENGTH,
            max_word_length: MAX_DICTIONARY_LENGTH,
            max_input_lines: MAX_INPUT_SIZE,
            min_line_length: MIN_INPUT_LENGTH,
            max_line_length: MAX_INPUT_LENGTH,
        }
    }
}

/// Checks one dictionary word against the length bounds.
pub fn validate_dictionary_word(
    line: usize,
    word: &str,
    constraints: &Constraints,
) -> Result<(), DictionaryConstraintError> {
    let length = word.chars().count();
    if !(constraints.min_word_length..=constraints.max_word_length).contains(&length) {
        return Err(DictionaryConstraintError::WordLength {
            word: word.to_string(),
            line,
            min: constraints.min_word_length,
            max: constraints.max_word_length,
        });
    }
    Ok(())
}

/// Validates dictionary lines and returns the trimmed words in order.
///
/// Duplicates are detected before lengths, so a repeated over-long word is
/// reported as a duplicate.
pub fn validate_dictionary_words<I, S>(
    lines: I,
    constraints: &Constraints,
) -> Result<Vec<String>, DictionaryConstraintError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut words = Vec::new();

    for (index, line) in lines.into_iter().enumerate() {
        let line_number = index + 1;
        let word = line.as_ref().trim();

        if seen.contains(word) {
            return Err(DictionaryConstraintError::Duplicate {
                word: word.to_string(),
                line: line_number,
            });
        }
        validate_dictionary_word(line_number, word, constraints)?;

        seen.insert(word.to_string());
        words.push(word.to_string());
        if words.len() > constraints.max_dictionary_words {
            return Err(DictionaryConstraintError::TooManyWords {
                max: constraints.max_dictionary_words,
            });
        }
    }

    Ok(words)
}

/// Reads and validates a dictionary file, one word per line.
pub fn validate_dictionary(
    path: impl AsRef<Path>,
    constraints: &Constraints,
) -> Result<Vec<String>, DictionaryConstraintError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| DictionaryConstraintError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let words = validate_dictionary_words(contents.lines(), constraints)?;
    debug!(path = %path.display(), words = words.len(), "dictionary file validated");
    Ok(words)
}

/// Checks one input line against the line-count and length bounds.
pub fn validate_input_line(
    line_number: usize,
    line: &str,
    constraints: &Constraints,
) -> Result<(), InputConstraintError> {
    if !(1..=constraints.max_input_lines).contains(&line_number) {
        return Err(InputConstraintError::TooManyLines {
            max: constraints.max_input_lines,
        });
    }

    let length = line.trim().chars().count();
    if !(constraints.min_line_length..=constraints.max_line_length).contains(&length) {
        return Err(InputConstraintError::LineLength {
            line: line_number,
            min: constraints.min_line_length,
            max: constraints.max_line_length,
        });
    }
    Ok(())
}

/// Validates input lines and returns them trimmed, in order.
pub fn validate_input_lines<I, S>(
    lines: I,
    constraints: &Constraints,
) -> Result<Vec<String>, InputConstraintError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .enumerate()
        .map(|(index, line)| {
            let line = line.as_ref();
            validate_input_line(index + 1, line, constraints)?;
            Ok::<_, InputConstraintError>(line.trim().to_string())
        })
        .collect()
}

/// Reads and validates an input file, one text per line.
pub fn validate_input_file(
    path: impl AsRef<Path>,
    constraints: &Constraints,
) -> Result<Vec<String>, InputConstraintError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| InputConstraintError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let lines = validate_input_lines(contents.lines(), constraints)?;
    debug!(path = %path.display(), lines = lines.len(), "input file validated");
    Ok(lines)
}

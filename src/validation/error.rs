//! Errors raised by the file validators.

use std::path::PathBuf;

use thiserror::Error;

/// A dictionary file or word list violates a configured constraint.
#[derive(Debug, Error)]
pub enum DictionaryConstraintError {
    /// The file could not be read.
    #[error("Failed to read dictionary file {}: {source}", path.display())]
    Io {
        /// The dictionary file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A word is shorter or longer than allowed.
    #[error("Word '{word}' on line {line} does not meet length requirements ({min}-{max})")]
    WordLength {
        /// The offending word, trimmed.
        word: String,
        /// 1-based line number.
        line: usize,
        /// Minimum length.
        min: usize,
        /// Maximum length.
        max: usize,
    },

    /// A literal word appears twice.
    #[error("Duplicate word found in dictionary: {word} on line {line}")]
    Duplicate {
        /// The repeated word.
        word: String,
        /// 1-based line number of the repetition.
        line: usize,
    },

    /// The dictionary holds more words than allowed.
    #[error("Dictionary exceeds {max} words limit")]
    TooManyWords {
        /// Maximum number of words.
        max: usize,
    },
}

/// An input file or line list violates a configured constraint.
#[derive(Debug, Error)]
pub enum InputConstraintError {
    /// The file could not be read.
    #[error("Failed to read input file {}: {source}", path.display())]
    Io {
        /// The input file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The input has more lines than allowed.
    #[error("Input file exceeds {max} lines limit")]
    TooManyLines {
        /// Maximum number of lines.
        max: usize,
    },

    /// A line is shorter or longer than allowed once trimmed.
    #[error("Line {line} does not meet length requirements ({min}-{max})")]
    LineLength {
        /// 1-based line number.
        line: usize,
        /// Minimum length.
        min: usize,
        /// Maximum length.
        max: usize,
    },
}

//! Error types raised by the matching core.
//!
//! The core only ever fails on malformed symbols or degenerate words. Size,
//! count and duplicate policy lives in [`crate::validation`] and has its own
//! error types there.

use thiserror::Error;

use crate::validation::DictionaryConstraintError;

/// A symbol outside the fixed alphabet was encountered.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AlphabetError {
    /// The character at `position` (counted in characters, not bytes) is not
    /// a lowercase ASCII letter.
    #[error("Unexpected symbol: {symbol:?} at position {position}")]
    InvalidSymbol {
        /// The offending character.
        symbol: char,
        /// Character offset of the offending symbol within its string.
        position: usize,
    },
}

impl AlphabetError {
    /// The offending character.
    pub fn symbol(&self) -> char {
        match self {
            AlphabetError::InvalidSymbol { symbol, .. } => *symbol,
        }
    }

    /// Character offset of the offending symbol.
    pub fn position(&self) -> usize {
        match self {
            AlphabetError::InvalidSymbol { position, .. } => *position,
        }
    }
}

/// Errors returned when adding a word to the dictionary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    /// The word has no interior to scramble.
    #[error("Word '{word}' is too short ({length} symbols, need at least {min})")]
    WordTooShort {
        /// The rejected word.
        word: String,
        /// Its length in characters.
        length: usize,
        /// The minimum accepted length.
        min: usize,
    },

    /// The word contains a symbol outside the alphabet.
    #[error("Invalid dictionary word: {0}")]
    Alphabet(#[from] AlphabetError),
}

/// Errors returned when scanning text.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// The text contains a symbol outside the alphabet.
    #[error("Invalid input text: {0}")]
    Alphabet(#[from] AlphabetError),
}

/// Errors returned by [`crate::ScrambledMatcher::import_dictionary`].
#[derive(Debug, Error)]
pub enum ImportError {
    /// The dictionary file violated a size, length or duplicate constraint.
    #[error(transparent)]
    Constraint(#[from] DictionaryConstraintError),

    /// A validated word was still rejected by the matcher.
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),
}

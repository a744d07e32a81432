//! Anchor/signature dictionary index.
//!
//! Words are filed under their [`Anchor`] (first and last symbol) and the
//! [`Signature`] of their interior. Words that agree on both collapse into a
//! single entry whose multiplicity counts how many times the combination was
//! added:
//!
//! ```text
//! (a, j) ─┬─ {p:1, x:1, a:1} ──▶ 2     axpaj, apxaj
//!         │
//! (d, t) ─┴─ {n:1, r:1, b:1} ──▶ 1     dnrbt
//! ```
//!
//! The index itself is not synchronized; [`crate::ScrambledMatcher`] wraps it
//! in a lock.

use std::collections::BTreeSet;
use std::fmt;

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::alphabet::{symbol_char, symbol_index, Symbol};
use crate::cache::SignatureCache;
use crate::error::{AlphabetError, DictionaryError};
use crate::signature::Signature;

/// Shortest word the index accepts. A single character has no interior and
/// both anchors would be the same symbol.
pub const MIN_WORD_LENGTH: usize = 2;

/// The first and last symbol of a word or text window.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Anchor {
    /// First symbol.
    pub first: Symbol,
    /// Last symbol.
    pub last: Symbol,
}

impl Anchor {
    /// Anchor from two symbol indices.
    #[inline]
    pub fn new(first: Symbol, last: Symbol) -> Self {
        Self { first, last }
    }

    /// Anchor from two characters.
    ///
    /// Error positions are anchor slots, not word offsets: 0 for `first`,
    /// 1 for `last`.
    pub fn from_chars(first: char, last: char) -> Result<Self, AlphabetError> {
        Ok(Self::new(symbol_index(first, 0)?, symbol_index(last, 1)?))
    }

    /// First character.
    pub fn first_char(&self) -> char {
        symbol_char(self.first)
    }

    /// Last character.
    pub fn last_char(&self) -> char {
        symbol_char(self.last)
    }
}

impl fmt::Debug for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Anchor({}, {})", self.first_char(), self.last_char())
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first_char(), self.last_char())
    }
}

/// Identity of a dictionary entry.
pub type EntryKey = (Anchor, Signature);

/// A word decomposed into the parts the index stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexedWord {
    /// First and last symbol.
    pub anchor: Anchor,
    /// Signature of the characters between the anchors.
    pub interior: Signature,
    /// Word length in symbols.
    pub length: usize,
}

impl IndexedWord {
    /// Decompose `word`, using `cache` for the interior signature.
    pub fn parse(word: &str, cache: &SignatureCache) -> Result<Self, DictionaryError> {
        let length = word.chars().count();
        if length < MIN_WORD_LENGTH {
            return Err(DictionaryError::WordTooShort {
                word: word.to_string(),
                length,
                min: MIN_WORD_LENGTH,
            });
        }

        // Validates every symbol, anchors included, so the word is ASCII from
        // here on and byte offsets are symbol offsets.
        let interior = cache.get_or_encode(word)?;

        let bytes = word.as_bytes();
        let anchor = Anchor::new(bytes[0] - b'a', bytes[bytes.len() - 1] - b'a');

        Ok(Self {
            anchor,
            interior,
            length,
        })
    }
}

/// Summary counters of a [`DictionaryIndex`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DictionaryStats {
    /// Every successful addition, duplicates included.
    pub word_count: usize,
    /// Distinct (anchor, interior signature) entries.
    pub entry_count: usize,
    /// Distinct anchors.
    pub anchor_count: usize,
    /// Distinct word lengths, ascending.
    pub word_lengths: Vec<usize>,
}

/// Maps anchors to interior signatures to multiplicities.
#[derive(Debug, Clone, Default)]
pub struct DictionaryIndex {
    entries: FxHashMap<Anchor, FxHashMap<Signature, usize>>,
    word_lengths: BTreeSet<usize>,
    word_count: usize,
    entry_count: usize,
}

impl DictionaryIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one occurrence of `word`.
    ///
    /// Returns `true` if this created a new entry and `false` if it only
    /// raised the multiplicity of an existing one. The index is untouched
    /// when an error is returned.
    pub fn add_word(&mut self, word: &str, cache: &SignatureCache) -> Result<bool, DictionaryError> {
        let parsed = IndexedWord::parse(word, cache)?;
        Ok(self.insert(parsed))
    }

    /// Files an already decomposed word.
    pub fn insert(&mut self, word: IndexedWord) -> bool {
        let multiplicity = self
            .entries
            .entry(word.anchor)
            .or_default()
            .entry(word.interior)
            .or_insert(0);
        *multiplicity += 1;
        let is_new = *multiplicity == 1;

        if is_new {
            self.entry_count += 1;
        }
        self.word_lengths.insert(word.length);
        self.word_count += 1;
        is_new
    }

    /// Multiplicity of the entry, or 0 if it does not exist.
    pub fn multiplicity(&self, anchor: Anchor, interior: &Signature) -> usize {
        self.entries
            .get(&anchor)
            .and_then(|signatures| signatures.get(interior))
            .copied()
            .unwrap_or(0)
    }

    /// All interior signatures filed under `anchor`.
    #[inline]
    pub fn signatures(&self, anchor: Anchor) -> Option<&FxHashMap<Signature, usize>> {
        self.entries.get(&anchor)
    }

    /// Whether any word has this anchor.
    #[inline]
    pub fn has_anchor(&self, anchor: Anchor) -> bool {
        self.entries.contains_key(&anchor)
    }

    /// Distinct word lengths, ascending.
    pub fn word_lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.word_lengths.iter().copied()
    }

    /// Every successful addition, duplicates included.
    #[inline]
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Distinct (anchor, interior signature) entries.
    #[inline]
    pub fn entry_count(&self) -> usize {
        self.entry_count
    }

    /// Distinct anchors.
    #[inline]
    pub fn anchor_count(&self) -> usize {
        self.entries.len()
    }

    /// Whether no word was added yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Iterates over `(anchor, interior, multiplicity)` in no particular order.
    pub fn entries(&self) -> impl Iterator<Item = (Anchor, &Signature, usize)> + '_ {
        self.entries.iter().flat_map(|(&anchor, signatures)| {
            signatures
                .iter()
                .map(move |(signature, &count)| (anchor, signature, count))
        })
    }

    /// Summary counters.
    pub fn stats(&self) -> DictionaryStats {
        DictionaryStats {
            word_count: self.word_count,
            entry_count: self.entry_count,
            anchor_count: self.entries.len(),
            word_lengths: self.word_lengths.iter().copied().collect(),
        }
    }
}

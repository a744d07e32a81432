//! The scrambled word matcher.
//!
//! [`ScrambledMatcher`] owns a [`DictionaryIndex`] behind a reader/writer
//! lock and scans text against it with the sliding-window algorithm in
//! [`scanner`].
//!
//! # Thread Safety
//!
//! Clones share the same dictionary. [`ScrambledMatcher::add_word`] holds the
//! write lock for its whole body, signature computation included, so
//! concurrent additions never interleave. Scans hold the read lock and keep
//! all of their working state on their own stack: any number of scans may run
//! in parallel, and they wait for in-flight additions to finish.
//!
//! # Example
//!
//! ```rust
//! use scrambled_matcher::ScrambledMatcher;
//!
//! let matcher = ScrambledMatcher::new();
//! matcher.add_word("maps").unwrap();
//! matcher.add_word("spam").unwrap();
//! assert_eq!(matcher.scan("pamsapms").unwrap(), 1);
//! ```

pub mod scanner;

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info, trace};

use crate::cache::{CacheStats, SignatureCache};
use crate::dictionary::{DictionaryIndex, DictionaryStats};
use crate::error::{DictionaryError, ImportError, InputError};
use crate::validation::{self, Constraints};

pub use scanner::{scan_index, ScanOptions, ScanReport};

/// Detects dictionary words whose interiors have been scrambled.
#[derive(Debug, Clone)]
pub struct ScrambledMatcher {
    index: Arc<RwLock<DictionaryIndex>>,
    cache: Arc<SignatureCache>,
    options: ScanOptions,
}

impl ScrambledMatcher {
    /// Creates an empty matcher with the default signature cache.
    pub fn new() -> Self {
        Self::with_cache(SignatureCache::default())
    }

    /// Creates an empty matcher whose signature cache holds at most
    /// `capacity` words. Zero disables caching.
    pub fn with_cache_capacity(capacity: usize) -> Self {
        Self::with_cache(SignatureCache::new(capacity))
    }

    fn with_cache(cache: SignatureCache) -> Self {
        Self {
            index: Arc::new(RwLock::new(DictionaryIndex::new())),
            cache: Arc::new(cache),
            options: ScanOptions::default(),
        }
    }

    /// Sets the options used by [`scan`](Self::scan).
    pub fn with_options(mut self, options: ScanOptions) -> Self {
        self.options = options;
        self
    }

    /// Creates a matcher and adds every word, stopping at the first error.
    pub fn from_words<I, S>(words: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let matcher = Self::new();
        matcher.add_words(words)?;
        Ok(matcher)
    }

    /// Options used by [`scan`](Self::scan).
    #[inline]
    pub fn options(&self) -> ScanOptions {
        self.options
    }

    /// Adds one word to the dictionary.
    ///
    /// Fails if the word is shorter than two symbols or contains a symbol
    /// outside the alphabet; the dictionary is unchanged in that case.
    pub fn add_word(&self, word: &str) -> Result<(), DictionaryError> {
        let mut index = self.index.write();
        let is_new = index.add_word(word, &self.cache)?;
        trace!(word, is_new, "word added");
        Ok(())
    }

    /// Adds words in order, stopping at the first error.
    ///
    /// Returns the number of words added. Words before a failing one stay in
    /// the dictionary.
    pub fn add_words<I, S>(&self, words: I) -> Result<usize, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut added = 0;
        for word in words {
            self.add_word(word.as_ref())?;
            added += 1;
        }
        debug!(added, "bulk add finished");
        Ok(added)
    }

    /// Adds words from a rayon thread pool.
    ///
    /// Additions commute, so the resulting dictionary is the same as with
    /// [`add_words`](Self::add_words). On error some of the other words may
    /// already have been added.
    #[cfg(feature = "parallel")]
    pub fn par_add_words<S>(&self, words: &[S]) -> Result<usize, DictionaryError>
    where
        S: AsRef<str> + Sync,
    {
        use rayon::prelude::*;

        words
            .par_iter()
            .try_for_each(|word| self.add_word(word.as_ref()))?;
        debug!(added = words.len(), "parallel bulk add finished");
        Ok(words.len())
    }

    /// Validates a dictionary file against `constraints` and adds every word.
    ///
    /// Nothing is added if validation fails.
    pub fn import_dictionary(
        &self,
        path: impl AsRef<Path>,
        constraints: &Constraints,
    ) -> Result<usize, ImportError> {
        let path = path.as_ref();
        let words = validation::validate_dictionary(path, constraints)?;
        let added = self.add_words(&words)?;
        info!(path = %path.display(), added, "dictionary imported");
        Ok(added)
    }

    /// Like [`import_dictionary`](Self::import_dictionary), adding the words
    /// in parallel.
    #[cfg(feature = "parallel")]
    pub fn par_import_dictionary(
        &self,
        path: impl AsRef<Path>,
        constraints: &Constraints,
    ) -> Result<usize, ImportError> {
        let path = path.as_ref();
        let words = validation::validate_dictionary(path, constraints)?;
        let added = self.par_add_words(&words)?;
        info!(path = %path.display(), added, "dictionary imported in parallel");
        Ok(added)
    }

    /// Counts the dictionary words present in `text`, scrambled or not.
    ///
    /// Each distinct entry contributes its multiplicity once, however often
    /// it occurs. Fails if `text` contains a symbol outside the alphabet.
    pub fn scan(&self, text: &str) -> Result<usize, InputError> {
        self.scan_with(text, self.options)
            .map(|report| report.matches)
    }

    /// Scans with explicit options and returns the full report.
    pub fn scan_with(&self, text: &str, options: ScanOptions) -> Result<ScanReport, InputError> {
        let index = self.index.read();
        let report = scan_index(&index, text, options)?;
        debug!(
            text_length = report.text_length,
            matches = report.matches,
            entries_matched = report.entries_matched,
            stopped_early = report.stopped_early,
            "scan finished"
        );
        Ok(report)
    }

    /// Summary counters of the dictionary.
    pub fn stats(&self) -> DictionaryStats {
        self.index.read().stats()
    }

    /// Every successful addition, duplicates included.
    pub fn word_count(&self) -> usize {
        self.index.read().word_count()
    }

    /// Distinct (anchor, interior signature) entries.
    pub fn entry_count(&self) -> usize {
        self.index.read().entry_count()
    }

    /// Whether no word was added yet.
    pub fn is_empty(&self) -> bool {
        self.index.read().is_empty()
    }

    /// Hit/miss counters of the signature cache.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

impl Default for ScrambledMatcher {
    fn default() -> Self {
        Self::new()
    }
}

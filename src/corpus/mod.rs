//! Synthetic corpora for benchmarking and smoke testing.
//!
//! [`CorpusGenerator`] produces dictionaries and input lines that already
//! satisfy a set of [`crate::validation::Constraints`], either as random words
//! with scrambled copies planted in noise, or as the permutation corpus where
//! every dictionary word is a prefix of a shuffled base word.

pub mod generator;

pub use generator::CorpusGenerator;

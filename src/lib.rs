//! # scrambled-matcher
//!
//! Detect dictionary words in text even when their interior letters have been
//! shuffled.
//!
//! A dictionary word matches a window of the text when the window has the
//! same first letter, the same last letter and the same multiset of letters
//! in between. `"axpaj"` therefore matches `"apxaj"` and `"aapxj"`, but not
//! `"jaxpa"`. Each dictionary entry is counted at most once per scanned text,
//! and literal duplicates in the dictionary each contribute to the count.
//!
//! Matching runs in a single pass: one sliding window per distinct word
//! length, each updated in constant time per step, checked against an index
//! keyed by anchor (first and last letter) and interior letter counts.
//!
//! ## Example
//!
//! ```rust
//! use scrambled_matcher::prelude::*;
//!
//! let matcher = ScrambledMatcher::from_words(["axpaj", "apxaj", "dnrbt", "pjxdn", "abd"])?;
//!
//! let text = "aapxjdnrbtvldptfzbbdbbzxtndrvjblnzjfpvhdhhpxjdnrbt";
//! assert_eq!(matcher.scan(text)?, 4);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Features
//!
//! - `parallel`: bulk dictionary import on a rayon thread pool
//! - `rand`: seeded generator for synthetic dictionaries and input files
//! - `cli`: the `scrambled-matcher` binary and its configuration layer

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod alphabet;
pub mod cache;
pub mod dictionary;
pub mod error;
pub mod matcher;
pub mod signature;
pub mod validation;

/// Synthetic dictionaries and input files
#[cfg(feature = "rand")]
pub mod corpus;

/// CLI interface and utilities
#[cfg(feature = "cli")]
pub mod cli;

pub use error::{AlphabetError, DictionaryError, ImportError, InputError};
pub use matcher::{ScanOptions, ScanReport, ScrambledMatcher};

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::cache::{CacheStats, SignatureCache};
    pub use crate::dictionary::{Anchor, DictionaryIndex, DictionaryStats};
    pub use crate::error::{AlphabetError, DictionaryError, ImportError, InputError};
    pub use crate::matcher::{ScanOptions, ScanReport, ScrambledMatcher};
    pub use crate::signature::Signature;
    pub use crate::validation::{Constraints, DictionaryConstraintError, InputConstraintError};

    #[cfg(feature = "rand")]
    pub use crate::corpus::CorpusGenerator;
}

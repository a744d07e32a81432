//! Bounded memoization for interior signatures.
//!
//! Signature encoding is a pure function of the word, so results can be
//! cached by the literal word. The cache is bounded and evicts the least
//! recently used word once full; it never grows past its capacity no matter
//! how many distinct words are fed through it.
//!
//! # Example
//!
//! ```rust
//! use scrambled_matcher::cache::SignatureCache;
//!
//! let cache = SignatureCache::new(2);
//! let first = cache.get_or_encode("maps").unwrap();
//! let again = cache.get_or_encode("maps").unwrap();
//! assert_eq!(first, again);
//! assert_eq!(cache.stats().hits, 1);
//! ```

pub mod lru;

pub use lru::{CacheStats, SignatureCache};

//! Character-frequency signatures.
//!
//! A [`Signature`] counts how many times each alphabet symbol occurs in a
//! span of text. Two spans are anagrams of each other exactly when their
//! signatures are equal, so a signature is an order-independent fingerprint
//! that never collides.
//!
//! ```rust
//! use scrambled_matcher::signature::Signature;
//!
//! let a = Signature::encode("listen").unwrap();
//! let b = Signature::encode("silent").unwrap();
//! assert_eq!(a, b);
//! assert_eq!(a.len(), 6);
//! ```

use std::fmt;

use crate::alphabet::{symbol_char, symbol_index, Symbol, ALPHABET_SIZE};
use crate::error::AlphabetError;

/// Per-symbol occurrence counts over a span of text.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Signature {
    counts: [u32; ALPHABET_SIZE],
}

impl Signature {
    /// The signature of the empty span.
    pub const EMPTY: Signature = Signature {
        counts: [0; ALPHABET_SIZE],
    };

    /// Encode `text`, failing on the first character outside the alphabet.
    ///
    /// Runs in O(len). The reported position is the character offset in
    /// `text`.
    pub fn encode(text: &str) -> Result<Self, AlphabetError> {
        let mut signature = Self::EMPTY;
        for (position, ch) in text.chars().enumerate() {
            signature.increment(symbol_index(ch, position)?);
        }
        Ok(signature)
    }

    /// Build a signature from already validated symbols.
    pub fn from_symbols(symbols: &[Symbol]) -> Self {
        let mut signature = Self::EMPTY;
        for &symbol in symbols {
            signature.increment(symbol);
        }
        signature
    }

    /// Occurrences of `symbol` in the span.
    #[inline]
    pub fn count(&self, symbol: Symbol) -> u32 {
        self.counts[symbol as usize]
    }

    /// The raw count vector, indexed by symbol.
    #[inline]
    pub fn counts(&self) -> &[u32; ALPHABET_SIZE] {
        &self.counts
    }

    /// Total number of symbols in the span.
    pub fn len(&self) -> usize {
        self.counts.iter().map(|&c| c as usize).sum()
    }

    /// Whether the span was empty.
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    // Window maintenance for the scanner. Callers guarantee a symbol is only
    // removed after it was added.
    #[inline]
    pub(crate) fn increment(&mut self, symbol: Symbol) {
        self.counts[symbol as usize] += 1;
    }

    #[inline]
    pub(crate) fn decrement(&mut self, symbol: Symbol) {
        debug_assert!(self.counts[symbol as usize] > 0);
        self.counts[symbol as usize] -= 1;
    }
}

impl Default for Signature {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature(\"{}\")", self)
    }
}

/// Sorted expansion of the span, e.g. `aabx` for `"xaba"`.
impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (symbol, &count) in self.counts.iter().enumerate() {
            let ch = symbol_char(symbol as Symbol);
            for _ in 0..count {
                write!(f, "{}", ch)?;
            }
        }
        Ok(())
    }
}

/// Signature of the characters strictly between the first and the last.
///
/// Every character of `word` is validated, including the two anchors. Words
/// of length 0, 1 or 2 have an empty interior.
///
/// ```rust
/// use scrambled_matcher::signature::{interior_signature, Signature};
///
/// let sig = interior_signature("maps").unwrap();
/// assert_eq!(sig, Signature::encode("pa").unwrap());
/// assert!(interior_signature("ab").unwrap().is_empty());
/// ```
pub fn interior_signature(word: &str) -> Result<Signature, AlphabetError> {
    let length = word.chars().count();
    let mut signature = Signature::EMPTY;
    for (position, ch) in word.chars().enumerate() {
        let symbol = symbol_index(ch, position)?;
        if position > 0 && position + 1 < length {
            signature.increment(symbol);
        }
    }
    Ok(signature)
}

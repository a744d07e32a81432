//! The fixed symbol set shared by dictionary words and scanned text.
//!
//! Symbols are the lowercase ASCII letters `a..=z`, mapped to dense indices
//! `0..ALPHABET_SIZE` so that signatures can be plain arrays.

use crate::error::AlphabetError;

/// Number of symbols in the alphabet.
pub const ALPHABET_SIZE: usize = 26;

/// Dense index of an alphabet symbol (`'a'` is 0, `'z'` is 25).
pub type Symbol = u8;

/// Map `ch` to its symbol index.
///
/// `position` is only used to build the error and should be the character
/// offset of `ch` in the string being processed.
///
/// # Example
///
/// ```rust
/// use scrambled_matcher::alphabet::symbol_index;
///
/// assert_eq!(symbol_index('a', 0), Ok(0));
/// assert_eq!(symbol_index('z', 0), Ok(25));
/// assert!(symbol_index('A', 4).is_err());
/// ```
#[inline]
pub fn symbol_index(ch: char, position: usize) -> Result<Symbol, AlphabetError> {
    if ch.is_ascii_lowercase() {
        Ok(ch as u8 - b'a')
    } else {
        Err(AlphabetError::InvalidSymbol {
            symbol: ch,
            position,
        })
    }
}

/// Inverse of [`symbol_index`].
#[inline]
pub fn symbol_char(symbol: Symbol) -> char {
    debug_assert!((symbol as usize) < ALPHABET_SIZE);
    (b'a' + symbol) as char
}

/// Convert a whole string to symbol indices, failing on the first character
/// outside the alphabet.
pub fn to_symbols(text: &str) -> Result<Vec<Symbol>, AlphabetError> {
    text.chars()
        .enumerate()
        .map(|(position, ch)| symbol_index(ch, position))
        .collect()
}

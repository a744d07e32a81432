//! Multi-length sliding-window scan.
//!
//! One window is kept per distinct dictionary word length. All windows are
//! advanced together by a single cursor; each step touches only the symbol
//! leaving and the symbol entering a window's interior, so a scan costs
//! O(text length × distinct lengths) signature updates plus one hash lookup
//! per window per step.
//!
//! Window and seen-entry state live on the stack of [`scan_index`] and are
//! dropped when it returns.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::alphabet::{to_symbols, Symbol};
use crate::dictionary::{Anchor, DictionaryIndex, EntryKey, MIN_WORD_LENGTH};
use crate::error::InputError;
use crate::signature::Signature;

/// Tuning knobs for a single scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanOptions {
    /// Stop as soon as every distinct entry has been found.
    ///
    /// Never changes the result, only how much of the text is visited.
    pub early_exit: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self { early_exit: true }
    }
}

/// Outcome of a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ScanReport {
    /// Sum of the multiplicities of every entry found.
    pub matches: usize,
    /// Distinct entries found.
    pub entries_matched: usize,
    /// Whether the cursor stopped before its last position.
    pub stopped_early: bool,
    /// Length of the scanned text in symbols.
    pub text_length: usize,
}

/// Sliding interior counts for one word length.
#[derive(Debug, Clone, Copy)]
struct Window {
    length: usize,
    interior: Signature,
}

impl Window {
    /// Window over `symbols[0..length]`.
    fn new(length: usize, symbols: &[Symbol]) -> Self {
        Self {
            length,
            interior: Signature::from_symbols(&symbols[1..length - 1]),
        }
    }

    /// Move the window from `left - 1` to `left`.
    #[inline]
    fn slide(&mut self, left: usize, symbols: &[Symbol]) {
        if self.length > MIN_WORD_LENGTH {
            self.interior.decrement(symbols[left]);
            self.interior.increment(symbols[left + self.length - 2]);
        }
    }
}

/// Scan `text` against `index`.
///
/// The whole text is validated first: any symbol outside the alphabet fails
/// the scan, even one that lies past the point where early exit would stop.
pub fn scan_index(
    index: &DictionaryIndex,
    text: &str,
    options: ScanOptions,
) -> Result<ScanReport, InputError> {
    let symbols = to_symbols(text)?;
    let text_length = symbols.len();
    let mut report = ScanReport {
        text_length,
        ..ScanReport::default()
    };

    if index.is_empty() || text_length < MIN_WORD_LENGTH {
        return Ok(report);
    }

    // Lengths come out ascending, so windows that do not fit are a suffix.
    let mut windows: SmallVec<[Window; 8]> = index
        .word_lengths()
        .take_while(|&length| length <= text_length)
        .map(|length| Window::new(length, &symbols))
        .collect();
    let shortest = match windows.first() {
        Some(window) => window.length,
        None => return Ok(report),
    };

    let target = index.entry_count();
    let mut seen: FxHashSet<EntryKey> = FxHashSet::default();

    for left in 0..text_length {
        for window in windows.iter_mut() {
            if left + window.length > text_length {
                break;
            }
            if left > 0 {
                window.slide(left, &symbols);
            }

            let anchor = Anchor::new(symbols[left], symbols[left + window.length - 1]);
            let multiplicity = match index.signatures(anchor) {
                Some(signatures) => match signatures.get(&window.interior) {
                    Some(&multiplicity) => multiplicity,
                    None => continue,
                },
                None => continue,
            };

            if seen.insert((anchor, window.interior)) {
                report.matches += multiplicity;
                trace!(
                    position = left,
                    length = window.length,
                    anchor = %anchor,
                    interior = %window.interior,
                    multiplicity,
                    "entry matched"
                );

                if options.early_exit && seen.len() == target {
                    report.entries_matched = seen.len();
                    report.stopped_early = left + shortest < text_length;
                    return Ok(report);
                }
            }
        }
    }

    report.entries_matched = seen.len();
    Ok(report)
}

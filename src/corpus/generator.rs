//! Seeded generators for dictionaries, scrambled words and input lines.
//!
//! **Note**: This module requires the optional `rand` dependency.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashSet;

use crate::validation::Constraints;

const LETTERS: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Chance that the next piece of a generated line is a planted word rather
/// than a random letter.
const PLANT_PROBABILITY: f64 = 0.25;

/// Generates synthetic corpora that satisfy a set of [`Constraints`].
///
/// Every method draws from one seeded `StdRng`, so the same seed and the same
/// sequence of calls always produce the same output.
///
/// # Example
///
/// ```rust
/// use scrambled_matcher::corpus::CorpusGenerator;
/// use scrambled_matcher::validation::Constraints;
///
/// let constraints = Constraints::default();
/// let mut gen = CorpusGenerator::new(42);
/// let words = gen.dictionary(10, &constraints);
/// let lines = gen.input_lines(&words, 5, &constraints);
/// assert_eq!(words.len(), 10);
/// assert_eq!(lines.len(), 5);
/// ```
pub struct CorpusGenerator {
    rng: StdRng,
}

impl CorpusGenerator {
    /// Create new generator with seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// A random lowercase word of exactly `length` letters.
    pub fn random_word(&mut self, length: usize) -> String {
        (0..length)
            .map(|_| LETTERS[self.rng.gen_range(0..LETTERS.len())] as char)
            .collect()
    }

    /// `word` with its interior shuffled and both anchors kept in place.
    ///
    /// The result may equal `word`, for instance when the interior has fewer
    /// than two distinct letters.
    pub fn scramble(&mut self, word: &str) -> String {
        let mut chars: Vec<char> = word.chars().collect();
        if chars.len() > 3 {
            let end = chars.len() - 1;
            chars[1..end].shuffle(&mut self.rng);
        }
        chars.into_iter().collect()
    }

    /// Up to `count` distinct random words within the word-length bounds.
    ///
    /// The count is capped at `max_dictionary_words`. Fewer words come back
    /// only when the length bounds leave too few distinct words to draw from.
    pub fn dictionary(&mut self, count: usize, constraints: &Constraints) -> Vec<String> {
        let count = count.min(constraints.max_dictionary_words);
        let min = constraints.min_word_length.max(2);
        let max = constraints.max_word_length.max(min);

        let mut seen = FxHashSet::default();
        let mut words = Vec::with_capacity(count);
        let mut attempts = 0;

        while words.len() < count && attempts < count * 64 {
            attempts += 1;
            let length = self.rng.gen_range(min..=max);
            let word = self.random_word(length);
            if seen.insert(word.clone()) {
                words.push(word);
            }
        }

        words
    }

    /// `count` input lines, capped at `max_input_lines`, with scrambled
    /// dictionary words planted among random letters.
    pub fn input_lines(
        &mut self,
        dictionary: &[String],
        count: usize,
        constraints: &Constraints,
    ) -> Vec<String> {
        let count = count.min(constraints.max_input_lines);
        (0..count)
            .map(|_| self.input_line(dictionary, constraints))
            .collect()
    }

    fn input_line(&mut self, dictionary: &[String], constraints: &Constraints) -> String {
        let min = constraints.min_line_length;
        let max = constraints.max_line_length.max(min);
        let target = self.rng.gen_range(min..=max);

        let mut line = String::with_capacity(target);
        while line.len() < target {
            let planted = if self.rng.gen_bool(PLANT_PROBABILITY) {
                dictionary.choose(&mut self.rng).cloned()
            } else {
                None
            };

            match planted {
                Some(word) if line.len() + word.len() <= target => {
                    let scrambled = self.scramble(&word);
                    line.push_str(&scrambled);
                }
                _ => line.push(LETTERS[self.rng.gen_range(0..LETTERS.len())] as char),
            }
        }

        line
    }

    /// A dictionary with one word per length in the word-length bounds, each
    /// a prefix of a different permutation of one random base word.
    ///
    /// Many distinct lengths sharing the same letters make every window of
    /// the scanner live at once, which is the expensive case.
    ///
    /// The base word is capped at `max_line_length` so that
    /// [`permutation_lines`](Self::permutation_lines) stays within bounds.
    pub fn permutation_dictionary(&mut self, constraints: &Constraints) -> (String, Vec<String>) {
        let min = constraints.min_word_length.max(2);
        let max = constraints
            .max_word_length
            .min(constraints.max_line_length)
            .max(min);
        let base = self.random_word(max);

        let mut seen = FxHashSet::default();
        let mut words = Vec::new();
        for length in min..=max {
            if words.len() >= constraints.max_dictionary_words {
                break;
            }
            for _ in 0..64 {
                let word = self.permute(&base)[..length].to_string();
                if seen.insert(word.clone()) {
                    words.push(word);
                    break;
                }
            }
        }

        (base, words)
    }

    /// Input lines made of back-to-back permutations of `base`, each as long
    /// as the line-length bound allows.
    pub fn permutation_lines(
        &mut self,
        base: &str,
        count: usize,
        constraints: &Constraints,
    ) -> Vec<String> {
        let count = count.min(constraints.max_input_lines);
        let pieces = (constraints.max_line_length / base.len().max(1)).max(1);
        (0..count)
            .map(|_| (0..pieces).map(|_| self.permute(base)).collect())
            .collect()
    }

    fn permute(&mut self, word: &str) -> String {
        let mut bytes = word.as_bytes().to_vec();
        bytes.shuffle(&mut self.rng);
        bytes.into_iter().map(char::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{validate_dictionary_words, validate_input_lines};
    use crate::ScrambledMatcher;

    #[test]
    fn test_same_seed_same_output() {
        let constraints = Constraints::default();
        let a = CorpusGenerator::new(7).dictionary(20, &constraints);
        let b = CorpusGenerator::new(7).dictionary(20, &constraints);
        assert_eq!(a, b);
    }

    #[test]
    fn test_dictionary_passes_validation() {
        let constraints = Constraints::default();
        let words = CorpusGenerator::new(1).dictionary(500, &constraints);
        assert_eq!(words.len(), constraints.max_dictionary_words);
        assert!(validate_dictionary_words(&words, &constraints).is_ok());
    }

    #[test]
    fn test_input_lines_pass_validation() {
        let constraints = Constraints::default();
        let mut gen = CorpusGenerator::new(2);
        let words = gen.dictionary(30, &constraints);
        let lines = gen.input_lines(&words, 100, &constraints);
        assert_eq!(lines.len(), 100);
        assert!(validate_input_lines(&lines, &constraints).is_ok());
    }

    #[test]
    fn test_scramble_keeps_anchors_and_letters() {
        let mut gen = CorpusGenerator::new(3);
        for word in ["axpaj", "ab", "abc", "extraordinary"] {
            let scrambled = gen.scramble(word);
            assert_eq!(scrambled.len(), word.len());
            assert_eq!(scrambled.chars().next(), word.chars().next());
            assert_eq!(scrambled.chars().last(), word.chars().last());

            let mut expected: Vec<char> = word.chars().collect();
            let mut actual: Vec<char> = scrambled.chars().collect();
            expected.sort_unstable();
            actual.sort_unstable();
            assert_eq!(actual, expected);
        }
    }

    #[test]
    fn test_scrambled_word_is_found() {
        let mut gen = CorpusGenerator::new(4);
        let matcher = ScrambledMatcher::from_words(["scrambled"]).unwrap();
        let text = format!("zz{}zz", gen.scramble("scrambled"));
        assert_eq!(matcher.scan(&text).unwrap(), 1);
    }

    #[test]
    fn test_permutation_corpus_respects_short_lines() {
        let constraints = Constraints {
            max_line_length: 10,
            ..Constraints::default()
        };
        let mut gen = CorpusGenerator::new(6);
        let (base, words) = gen.permutation_dictionary(&constraints);
        assert_eq!(base.len(), 10);
        assert!(words.iter().all(|word| word.len() <= 10));

        let lines = gen.permutation_lines(&base, 5, &constraints);
        assert!(validate_input_lines(&lines, &constraints).is_ok());
        assert!(lines.iter().all(|line| line.len() == 10));
    }

    #[test]
    fn test_permutation_corpus_shape() {
        let constraints = Constraints::default();
        let mut gen = CorpusGenerator::new(5);
        let (base, words) = gen.permutation_dictionary(&constraints);
        assert_eq!(base.len(), constraints.max_word_length);
        assert!(validate_dictionary_words(&words, &constraints).is_ok());

        let lines = gen.permutation_lines(&base, 10, &constraints);
        assert_eq!(lines.len(), 10);
        assert!(lines.iter().all(|line| line.len() == 500));
        assert!(validate_input_lines(&lines, &constraints).is_ok());
    }
}

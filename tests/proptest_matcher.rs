//! Property-based tests for the sliding-window matcher using proptest
//!
//! The scanner is checked against a naive reference that re-encodes every
//! window from scratch.

use proptest::prelude::*;
use scrambled_matcher::prelude::*;

// Small alphabet so that random texts actually contain matches
fn word_strategy() -> impl Strategy<Value = String> {
    "[a-d]{2,6}"
}

fn small_dict_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word_strategy(), 1..=8)
}

fn text_strategy() -> impl Strategy<Value = String> {
    "[a-d]{0,60}"
}

// A word and a shuffled copy of its interior
fn scrambled_word_strategy() -> impl Strategy<Value = (String, String)> {
    "[a-z]{2,20}".prop_flat_map(|word| {
        let chars: Vec<char> = word.chars().collect();
        let interior = chars[1..chars.len() - 1].to_vec();
        (Just(word), Just(interior).prop_shuffle()).prop_map(|(word, interior)| {
            let mut scrambled = String::with_capacity(word.len());
            scrambled.push(word.chars().next().unwrap());
            scrambled.extend(interior);
            scrambled.push(word.chars().last().unwrap());
            (word, scrambled)
        })
    })
}

fn sorted_interior(window: &[char]) -> Vec<char> {
    let mut interior = window[1..window.len() - 1].to_vec();
    interior.sort_unstable();
    interior
}

// Helper: count matches by comparing every word with every window
fn naive_scan(words: &[String], text: &str) -> usize {
    let text: Vec<char> = text.chars().collect();

    words
        .iter()
        .filter(|word| {
            let word: Vec<char> = word.chars().collect();
            let expected = sorted_interior(&word);
            text.windows(word.len()).any(|window| {
                window[0] == word[0]
                    && window[window.len() - 1] == word[word.len() - 1]
                    && sorted_interior(window) == expected
            })
        })
        .count()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: the sliding-window scan agrees with the naive reference
    #[test]
    fn prop_matches_naive_reference(words in small_dict_strategy(), text in text_strategy()) {
        let matcher = ScrambledMatcher::from_words(&words).unwrap();
        prop_assert_eq!(matcher.scan(&text).unwrap(), naive_scan(&words, &text));
    }

    /// Property: early exit never changes the total
    #[test]
    fn prop_early_exit_is_transparent(words in small_dict_strategy(), text in text_strategy()) {
        let matcher = ScrambledMatcher::from_words(&words).unwrap();
        let with_exit = matcher.scan_with(&text, ScanOptions { early_exit: true }).unwrap();
        let without_exit = matcher.scan_with(&text, ScanOptions { early_exit: false }).unwrap();
        prop_assert_eq!(with_exit.matches, without_exit.matches);
        prop_assert_eq!(with_exit.entries_matched, without_exit.entries_matched);
    }

    /// Property: a word with its interior shuffled is counted exactly once
    #[test]
    fn prop_anagram_invariance((word, scrambled) in scrambled_word_strategy()) {
        let matcher = ScrambledMatcher::from_words([&word]).unwrap();
        prop_assert_eq!(matcher.scan(&scrambled).unwrap(), 1);
    }

    /// Property: scanning an added word finds at least its own multiplicity
    #[test]
    fn prop_added_word_is_found(words in small_dict_strategy(), pick in any::<prop::sample::Index>()) {
        let matcher = ScrambledMatcher::from_words(&words).unwrap();
        let word = &words[pick.index(words.len())];
        let multiplicity = words.iter().filter(|w| *w == word).count();
        prop_assert!(matcher.scan(word).unwrap() >= multiplicity);
    }

    /// Property: repeated occurrences in the text count once
    #[test]
    fn prop_repeats_count_once(word in "[a-z]{2,20}") {
        let matcher = ScrambledMatcher::from_words([&word]).unwrap();
        prop_assert_eq!(matcher.scan(&word.repeat(5)).unwrap(), 1);
    }

    /// Property: scanning is idempotent and leaves the dictionary alone
    #[test]
    fn prop_scan_is_idempotent(words in small_dict_strategy(), text in text_strategy()) {
        let matcher = ScrambledMatcher::from_words(&words).unwrap();
        let before = matcher.stats();
        let first = matcher.scan(&text).unwrap();
        let second = matcher.scan(&text).unwrap();
        prop_assert_eq!(first, second);
        prop_assert_eq!(matcher.stats(), before);
    }

    /// Property: no match when the text avoids every dictionary anchor
    #[test]
    fn prop_no_false_positives(words in prop::collection::vec("[a-m]{2,8}", 1..=8), text in "[n-z]{0,60}") {
        let matcher = ScrambledMatcher::from_words(&words).unwrap();
        prop_assert_eq!(matcher.scan(&text).unwrap(), 0);
    }

    /// Property: the number of entries never exceeds the number of words
    #[test]
    fn prop_entry_count_bounded(words in small_dict_strategy()) {
        let matcher = ScrambledMatcher::from_words(&words).unwrap();
        prop_assert_eq!(matcher.word_count(), words.len());
        prop_assert!(matcher.entry_count() <= matcher.word_count());
    }
}

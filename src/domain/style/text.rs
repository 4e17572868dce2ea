//! Tokenization helpers shared by the style heuristics.
//!
//! Everything here is whitespace or regex based. Sentences end at runs of
//! `.`, `!` or `?`; words are whitespace-separated tokens (punctuation kept)
//! except for n-gram work, which uses `\w+` runs of the lowercased text.

use once_cell::sync::Lazy;
use regex::Regex;

static SENTENCE_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("sentence boundary pattern is valid"));

static WORD_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\w+\b").expect("word run pattern is valid"));

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y'];

/// Splits text into trimmed, non-empty sentences.
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_BOUNDARY
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Whitespace-separated tokens, punctuation attached.
pub fn whitespace_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// `\w+` runs of already-lowercased text.
pub fn word_runs(text_lower: &str) -> Vec<&str> {
    WORD_RUN.find_iter(text_lower).map(|m| m.as_str()).collect()
}

/// True when the token is non-empty and purely alphabetic.
pub fn is_alphabetic(word: &str) -> bool {
    !word.is_empty() && word.chars().all(char::is_alphabetic)
}

/// Number of characters (not bytes) in a token.
pub fn char_len(word: &str) -> usize {
    word.chars().count()
}

/// Estimates syllables as the number of vowel groups.
///
/// A trailing silent "e" removes one syllable when there is more than one.
/// Every word has at least one syllable.
pub fn count_syllables(word: &str) -> usize {
    let word = word.to_lowercase();
    let mut count = 0usize;
    let mut prev_was_vowel = false;

    for ch in word.chars() {
        let is_vowel = VOWELS.contains(&ch);
        if is_vowel && !prev_was_vowel {
            count += 1;
        }
        prev_was_vowel = is_vowel;
    }

    if word.ends_with('e') && count > 1 {
        count -= 1;
    }

    count.max(1)
}

/// Divides, treating a zero denominator as one.
pub fn ratio(numerator: f64, denominator: usize) -> f64 {
    numerator / denominator.max(1) as f64
}

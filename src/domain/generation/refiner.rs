//! Text Refiner - rule-based post-processing of generated text.
//!
//! Two independent passes run in order: sentence length adjustment, then
//! formality word substitution. Neither pass is idempotent and the two
//! substitution maps are not inverses of each other.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::style::{FormalityPreference, StyleProfile};

/// Targets below this trigger splitting of long sentences.
pub const SHORT_SENTENCE_TARGET: f64 = 12.0;

/// Targets above this trigger merging of short sentences.
pub const LONG_SENTENCE_TARGET: f64 = 20.0;

/// Sentences with more words than this are split candidates.
pub const SPLIT_MIN_WORDS: usize = 25;

/// A split conjunction must sit after this word index.
pub const SPLIT_MIN_INDEX: usize = 8;

/// Sentences with fewer words than this are merged with their successor.
pub const MERGE_MAX_WORDS: usize = 8;

/// Default target sentence length when a profile has none.
pub const DEFAULT_SENTENCE_TARGET: f64 = 15.0;

const SPLIT_CONJUNCTIONS: &[&str] = &["and", "but", "so", "because", "while"];

const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

static CASUAL_SUBSTITUTIONS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    substitutions(&[
        ("therefore", "so"),
        ("however", "but"),
        ("furthermore", "also"),
        ("consequently", "so"),
        ("nevertheless", "but still"),
    ])
});

static FORMAL_SUBSTITUTIONS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    substitutions(&[
        ("so", "therefore"),
        ("but", "however"),
        ("also", "furthermore"),
        ("anyway", "nonetheless"),
    ])
});

fn substitutions(pairs: &[(&str, &'static str)]) -> Vec<(Regex, &'static str)> {
    pairs
        .iter()
        .map(|(from, to)| {
            let pattern = Regex::new(&format!(r"(?i)\b{}\b", from))
                .expect("substitution pattern is valid");
            (pattern, *to)
        })
        .collect()
}

/// What the refiner steers toward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RefinementTarget {
    pub avg_sentence_length: f64,
    pub formality: FormalityPreference,
}

impl Default for RefinementTarget {
    fn default() -> Self {
        Self {
            avg_sentence_length: DEFAULT_SENTENCE_TARGET,
            formality: FormalityPreference::Neutral,
        }
    }
}

impl From<&StyleProfile> for RefinementTarget {
    fn from(profile: &StyleProfile) -> Self {
        Self {
            avg_sentence_length: profile.avg_sentence_length,
            formality: profile.formality_preference,
        }
    }
}

/// Stateless text refiner.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRefiner;

impl TextRefiner {
    /// Applies length adjustment, then formality substitution, then trims.
    pub fn refine(text: &str, target: &RefinementTarget) -> String {
        let adjusted = if target.avg_sentence_length < SHORT_SENTENCE_TARGET {
            Self::break_long_sentences(text)
        } else if target.avg_sentence_length > LONG_SENTENCE_TARGET {
            Self::combine_short_sentences(text)
        } else {
            text.to_string()
        };

        let styled = match target.formality {
            FormalityPreference::Casual => Self::make_casual(&adjusted),
            FormalityPreference::Formal => Self::make_formal(&adjusted),
            FormalityPreference::Neutral => adjusted,
        };

        styled.trim().to_string()
    }

    /// Splits sentences over [`SPLIT_MIN_WORDS`] words at the first late conjunction.
    ///
    /// The conjunction is dropped. Sentences without one stay intact.
    pub fn break_long_sentences(text: &str) -> String {
        let mut parts: Vec<String> = Vec::new();

        for sentence in text.split(SENTENCE_TERMINATORS) {
            let sentence = sentence.trim();
            if sentence.is_empty() {
                continue;
            }

            let words: Vec<&str> = sentence.split_whitespace().collect();
            let split_at = if words.len() > SPLIT_MIN_WORDS {
                words.iter().enumerate().position(|(i, word)| {
                    i > SPLIT_MIN_INDEX
                        && SPLIT_CONJUNCTIONS.contains(&word.to_lowercase().as_str())
                })
            } else {
                None
            };

            match split_at {
                Some(i) => {
                    parts.push(words[..i].join(" "));
                    parts.push(words[i + 1..].join(" "));
                }
                None => parts.push(sentence.to_string()),
            }
        }

        format!("{}.", parts.join(". "))
    }

    /// Merges each sentence under [`MERGE_MAX_WORDS`] words with its successor.
    ///
    /// One forward pass; a merged pair is never merged again.
    pub fn combine_short_sentences(text: &str) -> String {
        let sentences: Vec<&str> = text
            .split(SENTENCE_TERMINATORS)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();

        let mut parts: Vec<String> = Vec::new();
        let mut i = 0;
        while i < sentences.len() {
            let current = sentences[i];
            match sentences.get(i + 1) {
                Some(next) if current.split_whitespace().count() < MERGE_MAX_WORDS => {
                    parts.push(format!("{}, and {}", current, next.to_lowercase()));
                    i += 2;
                }
                _ => {
                    parts.push(current.to_string());
                    i += 1;
                }
            }
        }

        format!("{}.", parts.join(". "))
    }

    /// Replaces formal connectives with casual ones.
    pub fn make_casual(text: &str) -> String {
        apply(&CASUAL_SUBSTITUTIONS, text)
    }

    /// Replaces casual connectives with formal ones.
    pub fn make_formal(text: &str) -> String {
        apply(&FORMAL_SUBSTITUTIONS, text)
    }
}

fn apply(substitutions: &[(Regex, &str)], text: &str) -> String {
    substitutions
        .iter()
        .fold(text.to_string(), |acc, (pattern, replacement)| {
            pattern.replace_all(&acc, *replacement).into_owned()
        })
}

//! Metrics Extractor - surface statistics for one writing sample.
//!
//! Every heuristic is an independent pure function so it can be tested on its
//! own. [`MetricsExtractor::extract`] wires them together into a
//! [`SampleMetrics`]. None of them fail: empty input yields neutral defaults
//! (readability 50.0, formality 0.5, zero ratios).

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use super::embedding::StyleEmbedding;
use super::lexicon::{
    count_marker_hits, is_stop_word, ADJECTIVE_SUFFIXES, CLAUSE_CONJUNCTIONS, EMOTION_WORDS,
    FORMAL_MARKERS, INFORMAL_MARKERS, NEGATIVE_WORDS, POSITIVE_WORDS,
};
use super::metrics::{
    EmotionalLanguage, PosPatterns, PunctuationUsage, SampleMetrics, Sentiment,
    SentenceStructures, TermCount,
};
use super::text::{
    char_len, count_syllables, is_alphabetic, ratio, split_sentences, whitespace_words, word_runs,
};

/// Frequent content words kept per sample.
pub const TOP_WORDS_PER_SAMPLE: usize = 20;

/// Frequent phrases kept per sample.
pub const TOP_PHRASES_PER_SAMPLE: usize = 10;

/// Readability reported when there are no words or no sentences.
pub const NEUTRAL_READABILITY: f64 = 50.0;

/// Formality reported when no register markers are present.
pub const NEUTRAL_FORMALITY: f64 = 0.5;

/// Characters of context captured on each side of an emotion word.
const EMOTION_CONTEXT_CHARS: usize = 20;

static CONJUNCTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"\b({})\b", CLAUSE_CONJUNCTIONS.join("|")))
        .expect("conjunction pattern is valid")
});

struct EmotionPattern {
    emotion: &'static str,
    word: &'static str,
    context: Regex,
}

static EMOTION_PATTERNS: Lazy<Vec<EmotionPattern>> = Lazy::new(|| {
    EMOTION_WORDS
        .iter()
        .flat_map(|(emotion, words)| {
            words.iter().map(move |word| EmotionPattern {
                emotion,
                word,
                context: Regex::new(&format!(
                    r".{{0,{n}}}\b{w}\b.{{0,{n}}}",
                    n = EMOTION_CONTEXT_CHARS,
                    w = regex::escape(word)
                ))
                .expect("emotion context pattern is valid"),
            })
        })
        .collect()
});

/// Stateless extractor of [`SampleMetrics`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsExtractor;

impl MetricsExtractor {
    /// Computes all statistics for one raw text sample.
    pub fn extract(text: &str) -> SampleMetrics {
        let words = whitespace_words(text);
        let sentences = split_sentences(text);
        let text_lower = text.to_lowercase();

        let word_count = words.len();
        let sentence_count = sentences.len();
        let total_word_chars: usize = words.iter().map(|w| char_len(w)).sum();

        let unique_words: HashSet<String> = words
            .iter()
            .filter(|w| is_alphabetic(w))
            .map(|w| w.to_lowercase())
            .collect();

        let flesch = flesch_reading_ease(&words, &sentences);

        SampleMetrics {
            word_count,
            sentence_count,
            avg_sentence_length: ratio(word_count as f64, sentence_count),
            avg_word_length: ratio(total_word_chars as f64, word_count),
            flesch_reading_ease: flesch,
            grade_level: grade_level(flesch),
            unique_words: unique_words.len(),
            vocabulary_richness: ratio(unique_words.len() as f64, word_count),
            sentence_structures: sentence_structures(&sentences),
            punctuation: PunctuationUsage::count(text),
            emotional_language: emotional_language(&text_lower),
            formality_score: formality_score(&text_lower),
            frequent_words: frequent_words(&words, TOP_WORDS_PER_SAMPLE),
            frequent_phrases: frequent_phrases(&text_lower, TOP_PHRASES_PER_SAMPLE),
            pos_patterns: pos_patterns(&words),
            sentiment: sentiment(&text_lower),
            style_embedding: style_embedding(text, &words, &sentences),
        }
    }
}

/// Flesch Reading Ease, clamped to [0, 100].
pub fn flesch_reading_ease(words: &[&str], sentences: &[&str]) -> f64 {
    if words.is_empty() || sentences.is_empty() {
        return NEUTRAL_READABILITY;
    }

    let total_syllables: usize = words.iter().map(|w| count_syllables(w)).sum();
    let words_per_sentence = words.len() as f64 / sentences.len() as f64;
    let syllables_per_word = total_syllables as f64 / words.len() as f64;

    let score = 206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word;
    score.clamp(0.0, 100.0)
}

/// Approximate school grade for a Flesch score.
pub fn grade_level(flesch_score: f64) -> f64 {
    match flesch_score {
        s if s >= 90.0 => 5.0,
        s if s >= 80.0 => 6.0,
        s if s >= 70.0 => 7.0,
        s if s >= 60.0 => 8.5,
        s if s >= 50.0 => 10.0,
        s if s >= 30.0 => 13.0,
        _ => 16.0,
    }
}

/// Classifies sentences as simple, compound, or complex by conjunction use.
pub fn sentence_structures(sentences: &[&str]) -> SentenceStructures {
    let mut structures = SentenceStructures::default();
    let mut total_clauses = 0usize;

    for sentence in sentences {
        let lower = sentence.to_lowercase();
        let clauses = CONJUNCTION.find_iter(&lower).count() + 1;
        total_clauses += clauses;

        if clauses == 1 {
            structures.simple += 1;
        } else if lower.contains("and") || lower.contains("but") || lower.contains("or") {
            structures.compound += 1;
        } else {
            structures.complex += 1;
        }
    }

    structures.avg_clauses_per_sentence = ratio(total_clauses as f64, sentences.len());
    structures
}

/// Collects context snippets around emotion words, grouped by emotion.
///
/// An emotion appears in the map as soon as one of its words occurs as a
/// substring, even if no whole-word context matched.
pub fn emotional_language(text_lower: &str) -> EmotionalLanguage {
    let mut found = EmotionalLanguage::new();

    for pattern in EMOTION_PATTERNS.iter() {
        if !text_lower.contains(pattern.word) {
            continue;
        }
        let snippets = found.entry(pattern.emotion.to_string()).or_default();
        snippets.extend(
            pattern
                .context
                .find_iter(text_lower)
                .map(|m| m.as_str().to_string()),
        );
    }

    found
}

/// Share of formal markers among all register markers found.
pub fn formality_score(text: &str) -> f64 {
    let text_lower = text.to_lowercase();
    let formal = count_marker_hits(&text_lower, FORMAL_MARKERS);
    let informal = count_marker_hits(&text_lower, INFORMAL_MARKERS);

    if formal + informal == 0 {
        return NEUTRAL_FORMALITY;
    }
    formal as f64 / (formal + informal) as f64
}

/// Most frequent alphabetic words longer than two characters, minus stop words.
pub fn frequent_words(words: &[&str], limit: usize) -> Vec<TermCount> {
    let filtered = words
        .iter()
        .filter(|w| is_alphabetic(w) && char_len(w) > 2)
        .map(|w| w.to_lowercase())
        .filter(|w| !is_stop_word(w))
        .map(|w| (w, 1));

    TermCount::top_n(filtered, limit)
}

/// Most frequent bigrams and trigrams of lowercase word runs.
pub fn frequent_phrases(text_lower: &str, limit: usize) -> Vec<TermCount> {
    let runs = word_runs(text_lower);
    let bigrams = runs.windows(2).map(|w| (w.join(" "), 1));
    let trigrams = runs.windows(3).map(|w| (w.join(" "), 1));

    TermCount::top_n(bigrams.chain(trigrams), limit)
}

/// Suffix-based adjective/adverb ratios and long-word complexity.
pub fn pos_patterns(words: &[&str]) -> PosPatterns {
    let lowered: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();

    let adjectives = lowered
        .iter()
        .filter(|w| ADJECTIVE_SUFFIXES.iter().any(|s| w.ends_with(s)))
        .count();
    let adverbs = lowered.iter().filter(|w| w.ends_with("ly")).count();
    let long_words: HashSet<&str> = lowered
        .iter()
        .filter(|w| char_len(w) > 6)
        .map(String::as_str)
        .collect();

    PosPatterns {
        adjective_ratio: ratio(adjectives as f64, words.len()),
        adverb_ratio: ratio(adverbs as f64, words.len()),
        estimated_complexity: ratio(long_words.len() as f64, words.len()),
    }
}

/// Polarity and subjectivity from fixed positive/negative word lists.
pub fn sentiment(text: &str) -> Sentiment {
    let text_lower = text.to_lowercase();
    let positive = count_marker_hits(&text_lower, POSITIVE_WORDS);
    let negative = count_marker_hits(&text_lower, NEGATIVE_WORDS);
    let total = positive + negative;

    let polarity = if total == 0 {
        0.0
    } else {
        (positive as f64 - negative as f64) / total as f64
    };

    Sentiment {
        polarity,
        subjectivity: (total as f64 / 100.0).min(1.0),
    }
}

/// Hand-built style embedding of the raw text.
pub fn style_embedding(text: &str, words: &[&str], sentences: &[&str]) -> StyleEmbedding {
    let total_word_chars: usize = words.iter().map(|w| char_len(w)).sum();
    let distinct: HashSet<String> = words.iter().map(|w| w.to_lowercase()).collect();

    StyleEmbedding {
        word_count: words.len() as f64 / 1000.0,
        sentence_count: sentences.len() as f64 / 100.0,
        avg_sentence_length: ratio(words.len() as f64, sentences.len()) / 20.0,
        avg_word_length: ratio(total_word_chars as f64, words.len()) / 10.0,
        exclamation_rate: text.matches('!').count() as f64 / 10.0,
        question_rate: text.matches('?').count() as f64 / 10.0,
        formality: formality_score(text),
        vocabulary_richness: ratio(distinct.len() as f64, words.len()),
    }
}

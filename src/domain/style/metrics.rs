//! Per-sample text statistics.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::embedding::StyleEmbedding;

/// Emotion label to the context snippets where it was found.
pub type EmotionalLanguage = IndexMap<String, Vec<String>>;

/// A ranked term with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermCount {
    pub term: String,
    pub count: usize,
}

impl TermCount {
    pub fn new(term: impl Into<String>, count: usize) -> Self {
        Self {
            term: term.into(),
            count,
        }
    }

    /// Sums counts per term and keeps the `limit` most frequent.
    ///
    /// Ties keep the order in which terms were first seen.
    pub fn top_n<I, S>(counts: I, limit: usize) -> Vec<TermCount>
    where
        I: IntoIterator<Item = (S, usize)>,
        S: Into<String>,
    {
        let mut totals: IndexMap<String, usize> = IndexMap::new();
        for (term, count) in counts {
            *totals.entry(term.into()).or_insert(0) += count;
        }

        let mut ranked: Vec<TermCount> = totals
            .into_iter()
            .map(|(term, count)| TermCount { term, count })
            .collect();
        // sort_by is stable, so first-seen order survives among equal counts
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(limit);
        ranked
    }
}

/// Sentence-structure tally for one sample.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SentenceStructures {
    pub simple: usize,
    pub compound: usize,
    pub complex: usize,
    pub avg_clauses_per_sentence: f64,
}

impl SentenceStructures {
    /// Total sentences classified.
    pub fn total(&self) -> usize {
        self.simple + self.compound + self.complex
    }
}

/// Raw punctuation counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PunctuationUsage {
    pub exclamation_marks: usize,
    pub question_marks: usize,
    pub ellipsis: usize,
    pub semicolons: usize,
    pub colons: usize,
    pub dashes: usize,
    pub parentheses: usize,
    pub quotation_marks: usize,
}

impl PunctuationUsage {
    /// Counts punctuation marks in raw text.
    pub fn count(text: &str) -> Self {
        Self {
            exclamation_marks: text.matches('!').count(),
            question_marks: text.matches('?').count(),
            ellipsis: text.matches("...").count(),
            semicolons: text.matches(';').count(),
            colons: text.matches(':').count(),
            dashes: text.matches("---").count() + text.matches("--").count(),
            parentheses: text.matches('(').count(),
            quotation_marks: text.matches('"').count() + text.matches('\'').count(),
        }
    }

    /// Field-by-field sum.
    pub fn add(&self, other: &PunctuationUsage) -> PunctuationUsage {
        PunctuationUsage {
            exclamation_marks: self.exclamation_marks + other.exclamation_marks,
            question_marks: self.question_marks + other.question_marks,
            ellipsis: self.ellipsis + other.ellipsis,
            semicolons: self.semicolons + other.semicolons,
            colons: self.colons + other.colons,
            dashes: self.dashes + other.dashes,
            parentheses: self.parentheses + other.parentheses,
            quotation_marks: self.quotation_marks + other.quotation_marks,
        }
    }
}

/// Suffix-based part-of-speech estimates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PosPatterns {
    pub adjective_ratio: f64,
    pub adverb_ratio: f64,
    pub estimated_complexity: f64,
}

/// Word-list sentiment estimate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    /// -1.0 (negative) to 1.0 (positive).
    pub polarity: f64,
    /// 0.0 to 1.0.
    pub subjectivity: f64,
}

/// Everything measured on a single writing sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleMetrics {
    pub word_count: usize,
    pub sentence_count: usize,
    pub avg_sentence_length: f64,
    pub avg_word_length: f64,

    pub flesch_reading_ease: f64,
    pub grade_level: f64,

    pub unique_words: usize,
    pub vocabulary_richness: f64,

    pub sentence_structures: SentenceStructures,
    pub punctuation: PunctuationUsage,
    pub emotional_language: EmotionalLanguage,
    pub formality_score: f64,

    pub frequent_words: Vec<TermCount>,
    pub frequent_phrases: Vec<TermCount>,

    pub pos_patterns: PosPatterns,
    pub sentiment: Sentiment,
    pub style_embedding: StyleEmbedding,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_n_sums_and_ranks() {
        let ranked = TermCount::top_n(
            vec![("cat", 1), ("dog", 1), ("cat", 1), ("bird", 3)],
            2,
        );
        assert_eq!(ranked, vec![TermCount::new("bird", 3), TermCount::new("cat", 2)]);
    }

    #[test]
    fn top_n_keeps_first_seen_order_on_ties() {
        let ranked = TermCount::top_n(vec![("b", 1), ("a", 1), ("c", 1)], 10);
        let terms: Vec<_> = ranked.iter().map(|t| t.term.as_str()).collect();
        assert_eq!(terms, vec!["b", "a", "c"]);
    }

    #[test]
    fn punctuation_counts_marks() {
        let usage = PunctuationUsage::count("Wow! Really?! Well... (maybe) -- \"yes\"; no: it's");
        assert_eq!(usage.exclamation_marks, 2);
        assert_eq!(usage.question_marks, 1);
        assert_eq!(usage.ellipsis, 1);
        assert_eq!(usage.semicolons, 1);
        assert_eq!(usage.colons, 1);
        assert_eq!(usage.dashes, 1);
        assert_eq!(usage.parentheses, 1);
        assert_eq!(usage.quotation_marks, 3);
    }

    #[test]
    fn triple_dash_counts_both_patterns() {
        // "---" matches once as a triple and once as a double
        assert_eq!(PunctuationUsage::count("a --- b").dashes, 2);
    }

    #[test]
    fn punctuation_add_is_fieldwise() {
        let a = PunctuationUsage::count("!?");
        let b = PunctuationUsage::count("!!");
        let sum = a.add(&b);
        assert_eq!(sum.exclamation_marks, 3);
        assert_eq!(sum.question_marks, 1);
    }

    #[test]
    fn structures_total_sums_kinds() {
        let s = SentenceStructures {
            simple: 2,
            compound: 1,
            complex: 3,
            avg_clauses_per_sentence: 1.5,
        };
        assert_eq!(s.total(), 6);
    }
}

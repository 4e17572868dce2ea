//! Style module - measuring how a user writes.
//!
//! - `extractor` computes [`SampleMetrics`] for a single text
//! - `aggregator` folds many samples into a [`StyleProfile`]
//!
//! Everything here is pure and synchronous.

mod aggregator;
mod embedding;
mod extractor;
mod lexicon;
mod metrics;
mod profile;
mod text;

pub use aggregator::{AggregationError, ProfileAggregator, TOP_PROFILE_PHRASES, TOP_PROFILE_WORDS};
pub use embedding::{StyleEmbedding, EMBEDDING_DIMENSIONS, EMBEDDING_FEATURES};
pub use extractor::{
    emotional_language, flesch_reading_ease, formality_score, frequent_phrases, frequent_words,
    grade_level, pos_patterns, sentence_structures, sentiment, style_embedding, MetricsExtractor,
    NEUTRAL_FORMALITY, NEUTRAL_READABILITY,
};
pub use lexicon::{count_marker_hits, FORMAL_MARKERS, INFORMAL_MARKERS};
pub use metrics::{
    EmotionalLanguage, PosPatterns, PunctuationUsage, SampleMetrics, Sentiment,
    SentenceStructures, TermCount,
};
pub use profile::{
    FormalityPreference, PunctuationStyle, SentenceStructurePreference, SentimentTendencies,
    StyleProfile, StyleProfileRecord, VocabularyLevel,
};
pub use text::{split_sentences, whitespace_words};

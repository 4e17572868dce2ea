//! StyleProfile - the persistent style signature of one user.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, UserId};

use super::embedding::StyleEmbedding;
use super::metrics::{EmotionalLanguage, PunctuationUsage, TermCount};

/// Mean formality above which a writer counts as formal.
pub const FORMAL_THRESHOLD: f64 = 0.7;

/// Mean formality below which a writer counts as casual.
pub const CASUAL_THRESHOLD: f64 = 0.4;

/// Mean grade level above which vocabulary counts as advanced.
pub const ADVANCED_GRADE_THRESHOLD: f64 = 12.0;

/// Mean grade level above which vocabulary counts as intermediate.
pub const INTERMEDIATE_GRADE_THRESHOLD: f64 = 8.0;

/// Register a writer tends toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormalityPreference {
    Formal,
    Casual,
    Neutral,
}

impl FormalityPreference {
    /// Classifies a mean formality score.
    pub fn from_score(mean_formality: f64) -> Self {
        if mean_formality > FORMAL_THRESHOLD {
            Self::Formal
        } else if mean_formality < CASUAL_THRESHOLD {
            Self::Casual
        } else {
            Self::Neutral
        }
    }
}

impl Default for FormalityPreference {
    fn default() -> Self {
        Self::Neutral
    }
}

impl std::fmt::Display for FormalityPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Formal => write!(f, "formal"),
            Self::Casual => write!(f, "casual"),
            Self::Neutral => write!(f, "neutral"),
        }
    }
}

/// Vocabulary complexity band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VocabularyLevel {
    Advanced,
    Intermediate,
    Simple,
}

impl VocabularyLevel {
    /// Classifies a mean grade level.
    pub fn from_grade(mean_grade: f64) -> Self {
        if mean_grade > ADVANCED_GRADE_THRESHOLD {
            Self::Advanced
        } else if mean_grade > INTERMEDIATE_GRADE_THRESHOLD {
            Self::Intermediate
        } else {
            Self::Simple
        }
    }
}

impl Default for VocabularyLevel {
    fn default() -> Self {
        Self::Intermediate
    }
}

impl std::fmt::Display for VocabularyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Advanced => write!(f, "advanced"),
            Self::Intermediate => write!(f, "intermediate"),
            Self::Simple => write!(f, "simple"),
        }
    }
}

/// Share of each sentence kind across all samples.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SentenceStructurePreference {
    pub simple: f64,
    pub compound: f64,
    pub complex: f64,
}

/// Punctuation occurrences per 1000 words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PunctuationStyle {
    pub exclamation_marks: f64,
    pub question_marks: f64,
    pub ellipsis: f64,
    pub semicolons: f64,
    pub colons: f64,
    pub dashes: f64,
    pub parentheses: f64,
    pub quotation_marks: f64,
}

impl PunctuationStyle {
    /// Normalizes summed counts by the summed word count.
    pub fn per_thousand_words(totals: &PunctuationUsage, total_words: usize) -> Self {
        let rate = |count: usize| count as f64 / total_words.max(1) as f64 * 1000.0;
        Self {
            exclamation_marks: rate(totals.exclamation_marks),
            question_marks: rate(totals.question_marks),
            ellipsis: rate(totals.ellipsis),
            semicolons: rate(totals.semicolons),
            colons: rate(totals.colons),
            dashes: rate(totals.dashes),
            parentheses: rate(totals.parentheses),
            quotation_marks: rate(totals.quotation_marks),
        }
    }
}

/// Sentiment averaged over samples.
///
/// `sentiment_consistency` is `1 - stdev(polarities)` and is not clamped, so
/// strongly mixed samples can drive it below zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentTendencies {
    pub avg_polarity: f64,
    pub avg_subjectivity: f64,
    pub sentiment_consistency: f64,
}

/// Aggregated style signature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleProfile {
    pub sample_count: usize,

    pub avg_sentence_length: f64,
    pub avg_word_length: f64,
    pub vocabulary_richness: f64,
    pub avg_readability: f64,
    pub grade_level: f64,

    pub formality_preference: FormalityPreference,
    pub vocabulary_level: VocabularyLevel,

    pub emotional_expression_patterns: EmotionalLanguage,
    pub sentence_structure_preference: SentenceStructurePreference,

    pub preferred_words: Vec<TermCount>,
    pub preferred_phrases: Vec<TermCount>,

    pub punctuation_style: PunctuationStyle,
    pub sentiment_tendencies: SentimentTendencies,
    pub style_embedding: StyleEmbedding,
}

/// A user's stored profile plus bookkeeping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleProfileRecord {
    pub user_id: UserId,
    pub profile: StyleProfile,
    /// Starts at 1 and increments on every re-analysis.
    pub version: u32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl StyleProfileRecord {
    /// First profile for a user.
    pub fn new(user_id: UserId, profile: StyleProfile) -> Self {
        let now = Timestamp::now();
        Self {
            user_id,
            profile,
            version: 1,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the profile wholesale, keeping the creation time.
    pub fn replaced_with(self, profile: StyleProfile) -> Self {
        Self {
            profile,
            version: self.version + 1,
            updated_at: Timestamp::now(),
            ..self
        }
    }
}

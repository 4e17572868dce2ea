//! Style embedding - a fixed-schema surface feature record.
//!
//! Not a learned representation. Eight hand-built features occupy the first
//! slots of a 32-slot vector; the remaining slots are always zero. Keeping the
//! schema as named fields makes padding and averaging exact.

use serde::{Deserialize, Serialize};

/// Length of the serialized embedding vector.
pub const EMBEDDING_DIMENSIONS: usize = 32;

/// Number of populated feature slots.
pub const EMBEDDING_FEATURES: usize = 8;

/// Surface-statistics embedding of a text or a profile.
///
/// Serializes as a flat array of exactly [`EMBEDDING_DIMENSIONS`] numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct StyleEmbedding {
    /// Word count / 1000.
    pub word_count: f64,
    /// Sentence count / 100.
    pub sentence_count: f64,
    /// Average sentence length / 20.
    pub avg_sentence_length: f64,
    /// Average word length / 10.
    pub avg_word_length: f64,
    /// Exclamation marks / 10.
    pub exclamation_rate: f64,
    /// Question marks / 10.
    pub question_rate: f64,
    /// Formality score (0..1).
    pub formality: f64,
    /// Distinct lowercased tokens / total tokens.
    pub vocabulary_richness: f64,
}

impl StyleEmbedding {
    /// Features in slot order.
    pub fn features(&self) -> [f64; EMBEDDING_FEATURES] {
        [
            self.word_count,
            self.sentence_count,
            self.avg_sentence_length,
            self.avg_word_length,
            self.exclamation_rate,
            self.question_rate,
            self.formality,
            self.vocabulary_richness,
        ]
    }

    /// Zero-padded vector of exactly [`EMBEDDING_DIMENSIONS`] values.
    pub fn to_vector(&self) -> [f64; EMBEDDING_DIMENSIONS] {
        let mut vector = [0.0; EMBEDDING_DIMENSIONS];
        vector[..EMBEDDING_FEATURES].copy_from_slice(&self.features());
        vector
    }

    fn from_features(f: [f64; EMBEDDING_FEATURES]) -> Self {
        Self {
            word_count: f[0],
            sentence_count: f[1],
            avg_sentence_length: f[2],
            avg_word_length: f[3],
            exclamation_rate: f[4],
            question_rate: f[5],
            formality: f[6],
            vocabulary_richness: f[7],
        }
    }

    /// Elementwise arithmetic mean. Returns `None` for an empty slice.
    pub fn mean(embeddings: &[StyleEmbedding]) -> Option<StyleEmbedding> {
        if embeddings.is_empty() {
            return None;
        }

        let mut sums = [0.0; EMBEDDING_FEATURES];
        for embedding in embeddings {
            for (sum, value) in sums.iter_mut().zip(embedding.features()) {
                *sum += value;
            }
        }

        let n = embeddings.len() as f64;
        Some(Self::from_features(sums.map(|s| s / n)))
    }
}

impl From<StyleEmbedding> for Vec<f64> {
    fn from(embedding: StyleEmbedding) -> Self {
        embedding.to_vector().to_vec()
    }
}

impl TryFrom<Vec<f64>> for StyleEmbedding {
    type Error = String;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        if values.len() != EMBEDDING_DIMENSIONS {
            return Err(format!(
                "style embedding must have {} values, got {}",
                EMBEDDING_DIMENSIONS,
                values.len()
            ));
        }
        if values[EMBEDDING_FEATURES..].iter().any(|v| *v != 0.0) {
            return Err("style embedding padding must be zero".to_string());
        }

        let mut features = [0.0; EMBEDDING_FEATURES];
        features.copy_from_slice(&values[..EMBEDDING_FEATURES]);
        Ok(Self::from_features(features))
    }
}

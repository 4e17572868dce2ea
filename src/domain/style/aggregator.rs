//! Profile Aggregator - combines per-sample metrics into a StyleProfile.
//!
//! Every scalar is an unweighted mean across samples. Counters are summed and
//! re-ranked, punctuation is normalized against the total word count, and
//! the embedding is averaged elementwise. Aggregation always rebuilds the
//! whole profile; there is no incremental update.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

use super::embedding::StyleEmbedding;
use super::metrics::{EmotionalLanguage, PunctuationUsage, SampleMetrics, TermCount};
use super::profile::{
    FormalityPreference, PunctuationStyle, SentenceStructurePreference, SentimentTendencies,
    StyleProfile, VocabularyLevel,
};

/// Preferred words retained in a profile.
pub const TOP_PROFILE_WORDS: usize = 30;

/// Preferred phrases retained in a profile.
pub const TOP_PROFILE_PHRASES: usize = 20;

/// Reasons a profile cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AggregationError {
    #[error("At least one analyzed writing sample is required to build a style profile")]
    NoSamples,
}

impl From<AggregationError> for DomainError {
    fn from(err: AggregationError) -> Self {
        match err {
            AggregationError::NoSamples => DomainError::new(ErrorCode::NoSamples, err.to_string()),
        }
    }
}

/// Stateless builder of [`StyleProfile`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileAggregator;

impl ProfileAggregator {
    /// Builds a profile from the metrics of one user's samples.
    ///
    /// # Errors
    ///
    /// Returns [`AggregationError::NoSamples`] for an empty slice.
    pub fn aggregate(samples: &[SampleMetrics]) -> Result<StyleProfile, AggregationError> {
        if samples.is_empty() {
            return Err(AggregationError::NoSamples);
        }

        let grade_level = mean(samples.iter().map(|s| s.grade_level));
        let mean_formality = mean(samples.iter().map(|s| s.formality_score));
        let embeddings: Vec<StyleEmbedding> = samples.iter().map(|s| s.style_embedding).collect();

        Ok(StyleProfile {
            sample_count: samples.len(),
            avg_sentence_length: mean(samples.iter().map(|s| s.avg_sentence_length)),
            avg_word_length: mean(samples.iter().map(|s| s.avg_word_length)),
            vocabulary_richness: mean(samples.iter().map(|s| s.vocabulary_richness)),
            avg_readability: mean(samples.iter().map(|s| s.flesch_reading_ease)),
            grade_level,
            formality_preference: FormalityPreference::from_score(mean_formality),
            vocabulary_level: VocabularyLevel::from_grade(grade_level),
            emotional_expression_patterns: Self::merge_emotional_patterns(samples),
            sentence_structure_preference: Self::structure_preference(samples),
            preferred_words: TermCount::top_n(
                samples
                    .iter()
                    .flat_map(|s| s.frequent_words.iter().map(|t| (t.term.clone(), t.count))),
                TOP_PROFILE_WORDS,
            ),
            preferred_phrases: TermCount::top_n(
                samples
                    .iter()
                    .flat_map(|s| s.frequent_phrases.iter().map(|t| (t.term.clone(), t.count))),
                TOP_PROFILE_PHRASES,
            ),
            punctuation_style: Self::punctuation_style(samples),
            sentiment_tendencies: Self::sentiment_tendencies(samples),
            style_embedding: StyleEmbedding::mean(&embeddings).unwrap_or_default(),
        })
    }

    /// Concatenates snippets per emotion, first-seen emotion order.
    fn merge_emotional_patterns(samples: &[SampleMetrics]) -> EmotionalLanguage {
        let mut merged = EmotionalLanguage::new();
        for sample in samples {
            for (emotion, snippets) in &sample.emotional_language {
                merged
                    .entry(emotion.clone())
                    .or_default()
                    .extend(snippets.iter().cloned());
            }
        }
        merged
    }

    fn structure_preference(samples: &[SampleMetrics]) -> SentenceStructurePreference {
        let (simple, compound, complex) =
            samples
                .iter()
                .fold((0usize, 0usize, 0usize), |(s, cd, cx), sample| {
                    let st = &sample.sentence_structures;
                    (s + st.simple, cd + st.compound, cx + st.complex)
                });
        let total = (simple + compound + complex).max(1) as f64;

        SentenceStructurePreference {
            simple: simple as f64 / total,
            compound: compound as f64 / total,
            complex: complex as f64 / total,
        }
    }

    fn punctuation_style(samples: &[SampleMetrics]) -> PunctuationStyle {
        let totals = samples
            .iter()
            .fold(PunctuationUsage::default(), |acc, s| acc.add(&s.punctuation));
        let total_words: usize = samples.iter().map(|s| s.word_count).sum();
        PunctuationStyle::per_thousand_words(&totals, total_words)
    }

    fn sentiment_tendencies(samples: &[SampleMetrics]) -> SentimentTendencies {
        let polarities: Vec<f64> = samples.iter().map(|s| s.sentiment.polarity).collect();
        let avg_polarity = mean(polarities.iter().copied());
        let variance = mean(polarities.iter().map(|p| (p - avg_polarity).powi(2)));

        SentimentTendencies {
            avg_polarity,
            avg_subjectivity: mean(samples.iter().map(|s| s.sentiment.subjectivity)),
            // not clamped
            sentiment_consistency: 1.0 - variance.sqrt(),
        }
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, n) = values.fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    sum / n.max(1) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::style::extractor::MetricsExtractor;
    use proptest::prelude::*;

    const HAPPY: &str = "I am very happy today! The sun is bright and I feel excited about life.";
    const SAD: &str = "The rain fell all day. I was sad and a little worried about the garden.";

    fn with_formality(score: f64) -> SampleMetrics {
        let mut metrics = MetricsExtractor::extract(HAPPY);
        metrics.formality_score = score;
        metrics
    }

    #[test]
    fn empty_input_fails() {
        assert_eq!(
            ProfileAggregator::aggregate(&[]),
            Err(AggregationError::NoSamples)
        );
    }

    #[test]
    fn no_samples_maps_to_domain_code() {
        let err: DomainError = AggregationError::NoSamples.into();
        assert_eq!(err.code, ErrorCode::NoSamples);
    }

    #[test]
    fn single_happy_sample_profile() {
        let profile = ProfileAggregator::aggregate(&[MetricsExtractor::extract(HAPPY)]).unwrap();
        assert_eq!(profile.sample_count, 1);
        assert!(profile.emotional_expression_patterns.contains_key("joy"));
        assert!(profile.punctuation_style.exclamation_marks > 0.0);
    }

    #[test]
    fn high_formality_is_formal() {
        let profile =
            ProfileAggregator::aggregate(&[with_formality(0.9), with_formality(0.9)]).unwrap();
        assert_eq!(profile.formality_preference, FormalityPreference::Formal);
    }

    #[test]
    fn low_formality_is_casual() {
        let profile =
            ProfileAggregator::aggregate(&[with_formality(0.1), with_formality(0.1)]).unwrap();
        assert_eq!(profile.formality_preference, FormalityPreference::Casual);
    }

    #[test]
    fn scalars_are_unweighted_means() {
        let a = MetricsExtractor::extract(HAPPY);
        let b = MetricsExtractor::extract(SAD);
        let profile = ProfileAggregator::aggregate(&[a.clone(), b.clone()]).unwrap();

        let expected = (a.avg_sentence_length + b.avg_sentence_length) / 2.0;
        assert!((profile.avg_sentence_length - expected).abs() < 1e-12);
        let expected_grade = (a.grade_level + b.grade_level) / 2.0;
        assert!((profile.grade_level - expected_grade).abs() < 1e-12);
    }

    #[test]
    fn emotional_patterns_concatenate_across_samples() {
        let a = MetricsExtractor::extract(HAPPY);
        let profile = ProfileAggregator::aggregate(&[a.clone(), a.clone()]).unwrap();
        assert_eq!(
            profile.emotional_expression_patterns["joy"].len(),
            a.emotional_language["joy"].len() * 2
        );
    }

    #[test]
    fn emotional_patterns_keep_first_seen_order() {
        let profile = ProfileAggregator::aggregate(&[
            MetricsExtractor::extract(SAD),
            MetricsExtractor::extract(HAPPY),
        ])
        .unwrap();
        let emotions: Vec<_> = profile.emotional_expression_patterns.keys().cloned().collect();
        assert_eq!(emotions, vec!["sadness", "fear", "joy"]);
    }

    #[test]
    fn word_counters_are_summed() {
        let a = MetricsExtractor::extract("Gardens grow slowly. Gardens need water and patience.");
        let profile = ProfileAggregator::aggregate(&[a.clone(), a]).unwrap();
        assert_eq!(profile.preferred_words[0], TermCount::new("gardens", 4));
    }

    #[test]
    fn punctuation_normalized_by_total_words() {
        let mut a = MetricsExtractor::extract(HAPPY);
        a.word_count = 100;
        a.punctuation.exclamation_marks = 1;
        let mut b = MetricsExtractor::extract(HAPPY);
        b.word_count = 900;
        b.punctuation.exclamation_marks = 9;

        let profile = ProfileAggregator::aggregate(&[a, b]).unwrap();
        assert!((profile.punctuation_style.exclamation_marks - 10.0).abs() < 1e-9);
    }

    #[test]
    fn structure_preference_sums_to_one() {
        let profile = ProfileAggregator::aggregate(&[
            MetricsExtractor::extract(HAPPY),
            MetricsExtractor::extract(SAD),
        ])
        .unwrap();
        let p = profile.sentence_structure_preference;
        assert!((p.simple + p.compound + p.complex - 1.0).abs() < 1e-9);
    }

    #[test]
    fn bimodal_sentiment_has_zero_consistency() {
        let mut positive = MetricsExtractor::extract(HAPPY);
        positive.sentiment.polarity = 1.0;
        let mut negative = MetricsExtractor::extract(SAD);
        negative.sentiment.polarity = -1.0;

        let profile = ProfileAggregator::aggregate(&[positive, negative]).unwrap();
        assert_eq!(profile.sentiment_tendencies.avg_polarity, 0.0);
        assert!((profile.sentiment_tendencies.sentiment_consistency - 0.0).abs() < 1e-12);
    }

    #[test]
    fn identical_polarities_are_fully_consistent() {
        let a = MetricsExtractor::extract(HAPPY);
        let profile = ProfileAggregator::aggregate(&[a.clone(), a]).unwrap();
        assert_eq!(profile.sentiment_tendencies.sentiment_consistency, 1.0);
    }

    #[test]
    fn embedding_is_elementwise_mean() {
        let a = MetricsExtractor::extract(HAPPY);
        let b = MetricsExtractor::extract(SAD);
        let profile = ProfileAggregator::aggregate(&[a.clone(), b.clone()]).unwrap();

        let expected = (a.style_embedding.word_count + b.style_embedding.word_count) / 2.0;
        assert!((profile.style_embedding.word_count - expected).abs() < 1e-12);
        assert_eq!(profile.style_embedding.to_vector().len(), 32);
    }

    proptest! {
        #[test]
        fn sample_count_matches_input(texts in prop::collection::vec("[a-zA-Z !.?]{0,80}", 1..6)) {
            let metrics: Vec<_> = texts.iter().map(|t| MetricsExtractor::extract(t)).collect();
            let profile = ProfileAggregator::aggregate(&metrics).unwrap();
            prop_assert_eq!(profile.sample_count, texts.len());
            prop_assert!(profile.preferred_words.len() <= TOP_PROFILE_WORDS);
            prop_assert!(profile.preferred_phrases.len() <= TOP_PROFILE_PHRASES);
        }
    }
}

//! AnalyzeSamples - Command handler that (re)builds a user's style profile.
//!
//! The profile is written with a single `save` before any sample is flagged
//! as analyzed, so a failed write leaves both the old profile and the
//! sample flags untouched.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use crate::domain::foundation::{DomainError, SampleId, UserId};
use crate::domain::style::{
    FormalityPreference, MetricsExtractor, ProfileAggregator, SampleMetrics, StyleProfileRecord,
    VocabularyLevel,
};
use crate::ports::{StyleProfileRepository, WritingSampleRepository};

/// Command to analyze every sample of a user.
#[derive(Debug, Clone)]
pub struct AnalyzeSamplesCommand {
    pub user_id: UserId,
}

/// Summary of the freshly built profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyzeSamplesResult {
    pub sample_count: usize,
    pub vocabulary_level: VocabularyLevel,
    pub formality_preference: FormalityPreference,
    /// Rounded to two decimals.
    pub avg_sentence_length: f64,
    pub emotional_categories: usize,
    pub version: u32,
}

/// Handler for profile analysis.
pub struct AnalyzeSamplesHandler {
    samples: Arc<dyn WritingSampleRepository>,
    profiles: Arc<dyn StyleProfileRepository>,
}

impl AnalyzeSamplesHandler {
    pub fn new(
        samples: Arc<dyn WritingSampleRepository>,
        profiles: Arc<dyn StyleProfileRepository>,
    ) -> Self {
        Self { samples, profiles }
    }

    pub async fn handle(
        &self,
        cmd: AnalyzeSamplesCommand,
    ) -> Result<AnalyzeSamplesResult, DomainError> {
        // 1. Load samples in upload order
        let samples = self.samples.find_by_user(&cmd.user_id).await?;

        // 2. Extract metrics per sample
        let metrics: Vec<SampleMetrics> = samples
            .iter()
            .map(|sample| {
                let metrics = MetricsExtractor::extract(sample.content());
                debug!(
                    sample_id = %sample.id(),
                    word_count = metrics.word_count,
                    readability = metrics.flesch_reading_ease,
                    "Extracted sample metrics"
                );
                metrics
            })
            .collect();

        // 3. Aggregate (fails on zero samples)
        let profile = ProfileAggregator::aggregate(&metrics)?;

        // 4. Create or replace the profile record
        let record = match self.profiles.find_by_user(&cmd.user_id).await? {
            Some(existing) => existing.replaced_with(profile),
            None => StyleProfileRecord::new(cmd.user_id.clone(), profile),
        };
        self.profiles.save(&record).await?;

        // 5. Flag samples only once the profile is stored
        let ids: Vec<SampleId> = samples.iter().map(|s| *s.id()).collect();
        self.samples.mark_analyzed(&ids).await?;

        let profile = &record.profile;
        info!(
            user_id = %cmd.user_id,
            sample_count = profile.sample_count,
            version = record.version,
            formality = %profile.formality_preference,
            "Style profile updated"
        );

        Ok(AnalyzeSamplesResult {
            sample_count: profile.sample_count,
            vocabulary_level: profile.vocabulary_level,
            formality_preference: profile.formality_preference,
            avg_sentence_length: (profile.avg_sentence_length * 100.0).round() / 100.0,
            emotional_categories: profile.emotional_expression_patterns.len(),
            version: record.version,
        })
    }
}

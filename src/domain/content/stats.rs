//! Per-user generation statistics.

use serde::{Deserialize, Serialize};

use super::feedback::FeedbackType;
use super::generated::GeneratedContent;

/// Feedback tallies over a user's generations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationStats {
    pub total_generations: usize,
    pub accepted: usize,
    pub modified: usize,
    pub rejected: usize,
    /// Percentage of all generations that were accepted.
    pub acceptance_rate: f64,
    /// Percentage of all generations that were modified.
    pub modification_rate: f64,
}

impl GenerationStats {
    /// Tallies the latest feedback on each generation.
    pub fn from_contents<'a>(contents: impl IntoIterator<Item = &'a GeneratedContent>) -> Self {
        let mut stats = Self::default();
        for content in contents {
            stats.total_generations += 1;
            match content.feedback() {
                Some(FeedbackType::Accepted) => stats.accepted += 1,
                Some(FeedbackType::Modified) => stats.modified += 1,
                Some(FeedbackType::Rejected) => stats.rejected += 1,
                None => {}
            }
        }

        let denominator = stats.total_generations.max(1) as f64;
        stats.acceptance_rate = stats.accepted as f64 / denominator * 100.0;
        stats.modification_rate = stats.modified as f64 / denominator * 100.0;
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;
    use crate::domain::generation::ContextCategory;

    fn with_feedback(feedback: Option<FeedbackType>) -> GeneratedContent {
        let mut content = GeneratedContent::new(
            UserId::new("writer-1").unwrap(),
            "prompt",
            ContextCategory::General,
            "text",
        );
        if let Some(f) = feedback {
            content.record_feedback(f, None);
        }
        content
    }

    #[test]
    fn empty_history_has_zero_rates() {
        let stats = GenerationStats::from_contents(&[]);
        assert_eq!(stats.total_generations, 0);
        assert_eq!(stats.acceptance_rate, 0.0);
        assert_eq!(stats.modification_rate, 0.0);
    }

    #[test]
    fn rates_are_percentages_of_all_generations() {
        let contents = vec![
            with_feedback(Some(FeedbackType::Accepted)),
            with_feedback(Some(FeedbackType::Modified)),
            with_feedback(Some(FeedbackType::Rejected)),
            with_feedback(None),
        ];
        let stats = GenerationStats::from_contents(&contents);

        assert_eq!(stats.total_generations, 4);
        assert_eq!(stats.accepted, 1);
        assert_eq!(stats.modified, 1);
        assert_eq!(stats.rejected, 1);
        assert_eq!(stats.acceptance_rate, 25.0);
        assert_eq!(stats.modification_rate, 25.0);
    }

    #[test]
    fn single_accepted_generation_is_full_acceptance() {
        let stats = GenerationStats::from_contents(&[with_feedback(Some(FeedbackType::Accepted))]);
        assert_eq!(stats.acceptance_rate, 100.0);
    }
}

//! Feedback Analyzer - infers preference shifts from a user's edit.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::style::count_marker_hits;

/// Edits growing past this factor signal a preference for longer content.
pub const LONGER_CONTENT_FACTOR: f64 = 1.2;

/// Edits shrinking below this factor signal a preference for shorter content.
pub const SHORTER_CONTENT_FACTOR: f64 = 0.8;

const FEEDBACK_FORMAL_MARKERS: &[&str] =
    &["therefore", "however", "furthermore", "consequently", "moreover"];

const FEEDBACK_CASUAL_MARKERS: &[&str] =
    &["don't", "can't", "won't", "it's", "that's", "gonna", "wanna"];

/// A discrete preference shift inferred from one edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentSignal {
    PrefersLongerContent,
    PrefersShorterContent,
    IncreaseFormality,
    IncreaseCasualness,
    PreferSimplerVocabulary,
    PreferComplexVocabulary,
}

impl std::fmt::Display for AdjustmentSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            Self::PrefersLongerContent => "prefers_longer_content",
            Self::PrefersShorterContent => "prefers_shorter_content",
            Self::IncreaseFormality => "increase_formality",
            Self::IncreaseCasualness => "increase_casualness",
            Self::PreferSimplerVocabulary => "prefer_simpler_vocabulary",
            Self::PreferComplexVocabulary => "prefer_complex_vocabulary",
        };
        write!(f, "{}", tag)
    }
}

/// Result of comparing a generation with the user's edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackAnalysis {
    pub prompt: String,
    /// Whitespace word count of the generated text.
    pub original_length: usize,
    /// Whitespace word count of the edited text.
    pub modified_length: usize,
    pub style_adjustments: BTreeSet<AdjustmentSignal>,
}

impl FeedbackAnalysis {
    pub fn has(&self, signal: AdjustmentSignal) -> bool {
        self.style_adjustments.contains(&signal)
    }
}

/// Stateless feedback analyzer.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeedbackAnalyzer;

impl FeedbackAnalyzer {
    /// Compares `generated` with the user's `modified` version.
    ///
    /// Each signal pair is mutually exclusive: length, register, vocabulary.
    /// The vocabulary signals use word count against character count, which is
    /// a coarse proxy rather than real lexical complexity.
    pub fn analyze(prompt: &str, generated: &str, modified: &str) -> FeedbackAnalysis {
        let original_length = generated.split_whitespace().count();
        let modified_length = modified.split_whitespace().count();
        let mut signals = BTreeSet::new();

        if modified_length as f64 > original_length as f64 * LONGER_CONTENT_FACTOR {
            signals.insert(AdjustmentSignal::PrefersLongerContent);
        } else if (modified_length as f64) < original_length as f64 * SHORTER_CONTENT_FACTOR {
            signals.insert(AdjustmentSignal::PrefersShorterContent);
        }

        let generated_lower = generated.to_lowercase();
        let modified_lower = modified.to_lowercase();
        if count_marker_hits(&modified_lower, FEEDBACK_FORMAL_MARKERS)
            > count_marker_hits(&generated_lower, FEEDBACK_FORMAL_MARKERS)
        {
            signals.insert(AdjustmentSignal::IncreaseFormality);
        } else if count_marker_hits(&modified_lower, FEEDBACK_CASUAL_MARKERS)
            > count_marker_hits(&generated_lower, FEEDBACK_CASUAL_MARKERS)
        {
            signals.insert(AdjustmentSignal::IncreaseCasualness);
        }

        let original_chars = generated.chars().count();
        let modified_chars = modified.chars().count();
        if modified_length > original_length && modified_chars < original_chars {
            signals.insert(AdjustmentSignal::PreferSimplerVocabulary);
        } else if modified_length < original_length && modified_chars > original_chars {
            signals.insert(AdjustmentSignal::PreferComplexVocabulary);
        }

        FeedbackAnalysis {
            prompt: prompt.to_string(),
            original_length,
            modified_length,
            style_adjustments: signals,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longer_edit() {
        let analysis = FeedbackAnalyzer::analyze(
            "p",
            "one two three four five",
            "one two three four five six seven",
        );
        assert_eq!(analysis.original_length, 5);
        assert_eq!(analysis.modified_length, 7);
        assert!(analysis.has(AdjustmentSignal::PrefersLongerContent));
        assert!(!analysis.has(AdjustmentSignal::PrefersShorterContent));
    }

    #[test]
    fn shorter_edit() {
        let analysis = FeedbackAnalyzer::analyze("p", "one two three four five", "one two three");
        assert!(analysis.has(AdjustmentSignal::PrefersShorterContent));
    }

    #[test]
    fn small_length_change_emits_nothing() {
        let analysis = FeedbackAnalyzer::analyze("p", "one two three four five", "one two three four fives");
        assert!(analysis.style_adjustments.is_empty());
    }

    #[test]
    fn more_formal_markers_increase_formality() {
        let analysis = FeedbackAnalyzer::analyze(
            "p",
            "We left early so we could rest.",
            "We left early; therefore, we could rest.",
        );
        assert!(analysis.has(AdjustmentSignal::IncreaseFormality));
        assert!(!analysis.has(AdjustmentSignal::IncreaseCasualness));
    }

    #[test]
    fn contractions_increase_casualness() {
        let analysis = FeedbackAnalyzer::analyze(
            "p",
            "I do not think it is ready.",
            "I don't think it's ready.",
        );
        assert!(analysis.has(AdjustmentSignal::IncreaseCasualness));
    }

    #[test]
    fn formality_wins_over_casualness() {
        let analysis = FeedbackAnalyzer::analyze(
            "p",
            "It works.",
            "However, it's gonna work.",
        );
        assert!(analysis.has(AdjustmentSignal::IncreaseFormality));
        assert!(!analysis.has(AdjustmentSignal::IncreaseCasualness));
    }

    #[test]
    fn more_but_shorter_words_prefer_simpler_vocabulary() {
        let analysis = FeedbackAnalyzer::analyze("p", "Unquestionably magnificent", "So very good");
        assert!(analysis.has(AdjustmentSignal::PreferSimplerVocabulary));
    }

    #[test]
    fn fewer_but_longer_words_prefer_complex_vocabulary() {
        let analysis = FeedbackAnalyzer::analyze("p", "So very good", "Unquestionably magnificent");
        assert!(analysis.has(AdjustmentSignal::PreferComplexVocabulary));
    }

    #[test]
    fn analysis_is_deterministic() {
        let a = FeedbackAnalyzer::analyze("p", "I think so.", "Therefore, I believe it is the case.");
        let b = FeedbackAnalyzer::analyze("p", "I think so.", "Therefore, I believe it is the case.");
        assert_eq!(a, b);
    }

    #[test]
    fn signals_serialize_as_snake_case_tags() {
        let analysis = FeedbackAnalyzer::analyze("p", "one two three four five", "one");
        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(json["style_adjustments"][0], "prefers_shorter_content");
        assert_eq!(AdjustmentSignal::IncreaseCasualness.to_string(), "increase_casualness");
    }
}

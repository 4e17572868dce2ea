//! Style-conditioned prompt construction.

use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::style::StyleProfile;

/// Preferred words mentioned in the instruction block.
pub const PROMPT_PREFERRED_WORDS: usize = 5;

/// Emotion categories quoted for emotional-adjacent contexts.
pub const PROMPT_EMOTION_EXAMPLES: usize = 2;

/// Characters kept from each quoted emotion snippet.
pub const PROMPT_SNIPPET_CHARS: usize = 50;

/// Exclamation rate (per 1000 words) above which enthusiasm is encouraged.
pub const EXCLAMATION_ENCOURAGE_RATE: f64 = 5.0;

/// Exclamation rate (per 1000 words) below which exclamations are discouraged.
pub const EXCLAMATION_DISCOURAGE_RATE: f64 = 1.0;

/// What kind of writing the user is asking for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ContextCategory {
    General,
    Personal,
    Emotional,
    Creative,
    Other(String),
}

impl ContextCategory {
    /// Contexts where the profile's emotional patterns are quoted.
    pub fn is_emotional_adjacent(&self) -> bool {
        matches!(self, Self::Personal | Self::Emotional | Self::Creative)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::General => "general",
            Self::Personal => "personal",
            Self::Emotional => "emotional",
            Self::Creative => "creative",
            Self::Other(other) => other,
        }
    }
}

impl Default for ContextCategory {
    fn default() -> Self {
        Self::General
    }
}

impl From<&str> for ContextCategory {
    fn from(value: &str) -> Self {
        match value {
            "general" => Self::General,
            "personal" => Self::Personal,
            "emotional" => Self::Emotional,
            "creative" => Self::Creative,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for ContextCategory {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<ContextCategory> for String {
    fn from(value: ContextCategory) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for ContextCategory {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl std::fmt::Display for ContextCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Builds the conditioning text sent to the completion provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct StylePromptBuilder;

impl StylePromptBuilder {
    /// Wraps the user prompt in style instructions.
    ///
    /// Without a profile the prompt is returned unchanged.
    pub fn build(prompt: &str, profile: Option<&StyleProfile>, context: &ContextCategory) -> String {
        match profile {
            Some(profile) => {
                let style = Self::style_description(profile, context);
                format!(
                    "{}\n\nUser request: {}\n\nPlease respond in the writing style described above, making it sound natural and authentic:",
                    style.trim_end(),
                    prompt
                )
            }
            None => prompt.to_string(),
        }
    }

    /// The instruction block on its own.
    pub fn style_description(profile: &StyleProfile, context: &ContextCategory) -> String {
        let mut description = format!(
            "Write in a {} style with {} vocabulary. Average sentence length should be around {:.0} words. ",
            profile.formality_preference, profile.vocabulary_level, profile.avg_sentence_length
        );

        if !profile.preferred_words.is_empty() {
            let words: Vec<&str> = profile
                .preferred_words
                .iter()
                .take(PROMPT_PREFERRED_WORDS)
                .map(|t| t.term.as_str())
                .collect();
            description.push_str(&format!(
                "Try to naturally incorporate words like: {}. ",
                words.join(", ")
            ));
        }

        if context.is_emotional_adjacent() && !profile.emotional_expression_patterns.is_empty() {
            description.push_str("When expressing emotions, use patterns similar to these examples: ");
            for (emotion, examples) in profile
                .emotional_expression_patterns
                .iter()
                .take(PROMPT_EMOTION_EXAMPLES)
            {
                if let Some(first) = examples.first() {
                    let snippet: String = first.chars().take(PROMPT_SNIPPET_CHARS).collect();
                    description.push_str(&format!("{}: '{}...' ", emotion, snippet));
                }
            }
        }

        let exclamation_rate = profile.punctuation_style.exclamation_marks;
        if exclamation_rate > EXCLAMATION_ENCOURAGE_RATE {
            description.push_str("Use exclamation marks to show enthusiasm. ");
        } else if exclamation_rate < EXCLAMATION_DISCOURAGE_RATE {
            description.push_str("Avoid excessive exclamation marks, keep tone measured. ");
        }

        description
    }
}

//! Input limits for analysis, generation and history

use serde::Deserialize;

use super::error::ValidationError;

const MAX_HISTORY_LIMIT: usize = 100;

/// Analysis configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Minimum sample length in characters, after trimming
    #[serde(default = "default_min_sample_chars")]
    pub min_sample_chars: usize,

    /// Minimum prompt length in characters, after trimming
    #[serde(default = "default_min_prompt_chars")]
    pub min_prompt_chars: usize,

    /// Generations returned by history queries without a limit
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

impl AnalysisConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.history_limit == 0 || self.history_limit > MAX_HISTORY_LIMIT {
            return Err(ValidationError::InvalidHistoryLimit);
        }
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_sample_chars: default_min_sample_chars(),
            min_prompt_chars: default_min_prompt_chars(),
            history_limit: default_history_limit(),
        }
    }
}

fn default_min_sample_chars() -> usize {
    50
}

fn default_min_prompt_chars() -> usize {
    5
}

fn default_history_limit() -> usize {
    20
}

//! Completion provider configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Completion chain configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AiConfig {
    /// Ollama server base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model tried first
    #[serde(default = "default_primary_model")]
    pub primary_model: String,

    /// Smaller model tried when the primary fails
    #[serde(default = "default_fallback_model")]
    pub fallback_model: Option<String>,

    /// Generation timeout in seconds, per strategy
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Availability check timeout in seconds
    #[serde(default = "default_availability_timeout")]
    pub availability_timeout_secs: u64,

    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Serve canned templates when every model fails
    #[serde(default = "default_offline_fallback")]
    pub offline_fallback: bool,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Get availability check timeout as Duration
    pub fn availability_timeout(&self) -> Duration {
        Duration::from_secs(self.availability_timeout_secs)
    }

    /// Models in the order they are tried
    pub fn models(&self) -> Vec<&str> {
        let mut models = vec![self.primary_model.as_str()];
        if let Some(fallback) = self.fallback_model.as_deref().filter(|m| !m.is_empty()) {
            models.push(fallback);
        }
        models
    }

    /// Validate AI configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.base_url.trim().is_empty() {
            return Err(ValidationError::MissingRequired("ECRITOIRE__AI__BASE_URL"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidBaseUrl);
        }
        if self.primary_model.trim().is_empty() {
            return Err(ValidationError::MissingRequired("ECRITOIRE__AI__PRIMARY_MODEL"));
        }
        if self.timeout_secs == 0 || self.availability_timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ValidationError::InvalidTemperature);
        }
        if self.max_tokens == 0 {
            return Err(ValidationError::InvalidMaxTokens);
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            primary_model: default_primary_model(),
            fallback_model: default_fallback_model(),
            timeout_secs: default_timeout(),
            availability_timeout_secs: default_availability_timeout(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            offline_fallback: default_offline_fallback(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_primary_model() -> String {
    "llama2:7b-chat".to_string()
}

fn default_fallback_model() -> Option<String> {
    Some("llama2:3b-chat".to_string())
}

fn default_timeout() -> u64 {
    120
}

fn default_availability_timeout() -> u64 {
    5
}

fn default_max_tokens() -> u32 {
    1000
}

fn default_temperature() -> f32 {
    0.7
}

fn default_offline_fallback() -> bool {
    true
}

//! StyleConditionedGenerator - prompt conditioning around a completion provider.
//!
//! Builds the style instructions, calls the provider once, and refines the
//! raw text toward the profile. Fallback between models and the offline
//! template lives in the provider (see `FallbackChainProvider`), so this
//! service only sees either text or a fully exhausted chain.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::generation::{
    ContextCategory, RefinementTarget, StylePromptBuilder, TextRefiner,
};
use crate::domain::style::StyleProfile;
use crate::ports::{AIProvider, CompletionRequest, RequestMetadata};

/// Sampling options sent with every request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorSettings {
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            max_tokens: 1000,
            temperature: 0.7,
        }
    }
}

/// Errors from style-conditioned generation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerationError {
    /// Every completion strategy failed.
    #[error("Generation unavailable: {cause}")]
    Unavailable { cause: String },
}

impl From<GenerationError> for DomainError {
    fn from(err: GenerationError) -> Self {
        let message = err.to_string();
        match err {
            GenerationError::Unavailable { cause } => {
                DomainError::new(ErrorCode::GenerationUnavailable, message).with_detail("cause", cause)
            }
        }
    }
}

/// Refined text plus the model that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedText {
    pub text: String,
    pub model: String,
}

/// Stateless apart from its provider handle; share one per process.
#[derive(Clone)]
pub struct StyleConditionedGenerator {
    provider: Arc<dyn AIProvider>,
    settings: GeneratorSettings,
}

impl StyleConditionedGenerator {
    pub fn new(provider: Arc<dyn AIProvider>) -> Self {
        Self {
            provider,
            settings: GeneratorSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: GeneratorSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// Generates text for `prompt` in the style of `profile`.
    ///
    /// With no profile the bare prompt is forwarded and the output is not
    /// refined.
    ///
    /// # Errors
    ///
    /// `GenerationError::Unavailable` when the provider returns an error.
    pub async fn generate(
        &self,
        prompt: &str,
        profile: Option<&StyleProfile>,
        context: &ContextCategory,
        user_id: Option<&UserId>,
    ) -> Result<GeneratedText, GenerationError> {
        let conditioned = StylePromptBuilder::build(prompt, profile, context);
        debug!(
            context = %context,
            conditioned = profile.is_some(),
            prompt_chars = conditioned.chars().count(),
            "Built completion prompt"
        );

        let request = CompletionRequest::new(conditioned)
            .with_max_tokens(self.settings.max_tokens)
            .with_temperature(self.settings.temperature)
            .with_metadata(RequestMetadata::new(
                user_id.cloned(),
                uuid::Uuid::new_v4().to_string(),
            ));

        let response = self
            .provider
            .complete(request)
            .await
            .map_err(|e| GenerationError::Unavailable {
                cause: e.to_string(),
            })?;

        let text = match profile {
            Some(profile) => TextRefiner::refine(&response.content, &RefinementTarget::from(profile)),
            None => response.content,
        };

        info!(
            model = %response.model,
            tokens = response.usage.total_tokens,
            chars = text.chars().count(),
            "Generated styled text"
        );

        Ok(GeneratedText {
            text,
            model: response.model,
        })
    }
}

impl std::fmt::Debug for StyleConditionedGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyleConditionedGenerator")
            .field("provider", &self.provider.provider_info())
            .field("settings", &self.settings)
            .finish()
    }
}

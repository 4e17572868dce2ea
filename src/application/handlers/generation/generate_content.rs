//! GenerateContent - Command handler for style-conditioned generation.

use std::sync::Arc;

use tracing::info;

use crate::application::StyleConditionedGenerator;
use crate::domain::content::GeneratedContent;
use crate::domain::foundation::{DomainError, ErrorCode, UserId, ValidationError};
use crate::domain::generation::ContextCategory;
use crate::ports::{GeneratedContentRepository, StyleProfileRepository};

/// Default minimum prompt length, in characters after trimming.
pub const MIN_PROMPT_CHARS: usize = 5;

/// Command to generate text in the user's style.
#[derive(Debug, Clone)]
pub struct GenerateContentCommand {
    pub user_id: UserId,
    pub prompt: String,
    pub context: ContextCategory,
}

/// Handler for content generation.
pub struct GenerateContentHandler {
    generator: Arc<StyleConditionedGenerator>,
    profiles: Arc<dyn StyleProfileRepository>,
    contents: Arc<dyn GeneratedContentRepository>,
    min_prompt_chars: usize,
}

impl GenerateContentHandler {
    pub fn new(
        generator: Arc<StyleConditionedGenerator>,
        profiles: Arc<dyn StyleProfileRepository>,
        contents: Arc<dyn GeneratedContentRepository>,
    ) -> Self {
        Self {
            generator,
            profiles,
            contents,
            min_prompt_chars: MIN_PROMPT_CHARS,
        }
    }

    /// Overrides the minimum prompt length.
    pub fn with_min_prompt_chars(mut self, min: usize) -> Self {
        self.min_prompt_chars = min;
        self
    }

    pub async fn handle(&self, cmd: GenerateContentCommand) -> Result<GeneratedContent, DomainError> {
        // 1. Validate prompt
        let prompt = cmd.prompt.trim();
        let prompt_chars = prompt.chars().count();
        if prompt_chars < self.min_prompt_chars {
            return Err(ValidationError::too_short("prompt", self.min_prompt_chars, prompt_chars).into());
        }

        // 2. Require a profile
        let record = self
            .profiles
            .find_by_user(&cmd.user_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::StyleProfileNotFound,
                    "No style profile found. Please upload and analyze writing samples first.",
                )
                .with_detail("user_id", cmd.user_id.to_string())
            })?;

        // 3. Generate and refine
        let generated = self
            .generator
            .generate(prompt, Some(&record.profile), &cmd.context, Some(&cmd.user_id))
            .await?;

        // 4. Persist
        let content = GeneratedContent::new(cmd.user_id, prompt, cmd.context, generated.text);
        self.contents.save(&content).await?;

        info!(
            user_id = %content.user_id(),
            content_id = %content.id(),
            model = %generated.model,
            context = %content.context(),
            "Content generated"
        );
        Ok(content)
    }
}

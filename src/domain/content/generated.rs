//! GeneratedContent - text produced in the user's style.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ContentId, OwnedByUser, Timestamp, UserId};
use crate::domain::generation::ContextCategory;

use super::feedback::FeedbackType;

/// One style-conditioned generation and the user's reaction to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedContent {
    id: ContentId,
    user_id: UserId,
    prompt: String,
    context: ContextCategory,
    generated_text: String,
    feedback: Option<FeedbackType>,
    modifications: Option<String>,
    created_at: Timestamp,
}

impl GeneratedContent {
    pub fn new(
        user_id: UserId,
        prompt: impl Into<String>,
        context: ContextCategory,
        generated_text: impl Into<String>,
    ) -> Self {
        Self {
            id: ContentId::new(),
            user_id,
            prompt: prompt.into(),
            context,
            generated_text: generated_text.into(),
            feedback: None,
            modifications: None,
            created_at: Timestamp::now(),
        }
    }

    pub fn id(&self) -> &ContentId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn context(&self) -> &ContextCategory {
        &self.context
    }

    pub fn generated_text(&self) -> &str {
        &self.generated_text
    }

    pub fn feedback(&self) -> Option<FeedbackType> {
        self.feedback
    }

    pub fn modifications(&self) -> Option<&str> {
        self.modifications.as_deref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// True when the user supplied an edited version.
    pub fn has_modifications(&self) -> bool {
        self.modifications.as_deref().map_or(false, |m| !m.is_empty())
    }

    /// Records the latest feedback. An empty or missing edit keeps the previous one.
    pub fn record_feedback(&mut self, feedback: FeedbackType, modified: Option<&str>) {
        self.feedback = Some(feedback);
        if let Some(text) = modified.filter(|t| !t.is_empty()) {
            self.modifications = Some(text.to_string());
        }
    }
}

impl OwnedByUser for GeneratedContent {
    fn owner_id(&self) -> &UserId {
        &self.user_id
    }
}

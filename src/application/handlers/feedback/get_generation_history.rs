//! GetGenerationHistory - Query handler for a user's recent generations.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::content::{FeedbackType, GeneratedContent};
use crate::domain::foundation::{ContentId, DomainError, Timestamp, UserId, ValidationError};
use crate::domain::generation::ContextCategory;
use crate::ports::GeneratedContentRepository;

/// Entries returned when the query gives no limit.
pub const DEFAULT_HISTORY_LIMIT: usize = 20;

/// Largest accepted limit.
pub const MAX_HISTORY_LIMIT: usize = 100;

/// Query for recent generations.
#[derive(Debug, Clone)]
pub struct GetGenerationHistoryQuery {
    pub user_id: UserId,
    pub limit: Option<usize>,
}

/// One row of generation history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationHistoryEntry {
    pub content_id: ContentId,
    pub prompt: String,
    pub context: ContextCategory,
    pub generated_text: String,
    pub feedback: Option<FeedbackType>,
    pub has_modifications: bool,
    pub created_at: Timestamp,
}

impl From<&GeneratedContent> for GenerationHistoryEntry {
    fn from(content: &GeneratedContent) -> Self {
        Self {
            content_id: *content.id(),
            prompt: content.prompt().to_string(),
            context: content.context().clone(),
            generated_text: content.generated_text().to_string(),
            feedback: content.feedback(),
            has_modifications: content.has_modifications(),
            created_at: *content.created_at(),
        }
    }
}

/// Handler for generation history.
pub struct GetGenerationHistoryHandler {
    contents: Arc<dyn GeneratedContentRepository>,
    default_limit: usize,
}

impl GetGenerationHistoryHandler {
    pub fn new(contents: Arc<dyn GeneratedContentRepository>) -> Self {
        Self {
            contents,
            default_limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    /// Overrides the limit used when the query gives none.
    pub fn with_default_limit(mut self, limit: usize) -> Self {
        self.default_limit = limit;
        self
    }

    /// Newest first.
    pub async fn handle(
        &self,
        query: GetGenerationHistoryQuery,
    ) -> Result<Vec<GenerationHistoryEntry>, DomainError> {
        let limit = query.limit.unwrap_or(self.default_limit);
        if limit == 0 || limit > MAX_HISTORY_LIMIT {
            return Err(ValidationError::out_of_range(
                "limit",
                1,
                MAX_HISTORY_LIMIT as i64,
                limit as i64,
            )
            .into());
        }

        let contents = self.contents.find_recent_by_user(&query.user_id, limit).await?;
        Ok(contents.iter().map(GenerationHistoryEntry::from).collect())
    }
}

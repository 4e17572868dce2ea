//! GetGenerationStats - Query handler for feedback tallies.

use std::sync::Arc;

use crate::domain::content::GenerationStats;
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::GeneratedContentRepository;

/// Query for a user's generation statistics.
#[derive(Debug, Clone)]
pub struct GetGenerationStatsQuery {
    pub user_id: UserId,
}

/// Handler for generation statistics.
pub struct GetGenerationStatsHandler {
    contents: Arc<dyn GeneratedContentRepository>,
}

impl GetGenerationStatsHandler {
    pub fn new(contents: Arc<dyn GeneratedContentRepository>) -> Self {
        Self { contents }
    }

    pub async fn handle(&self, query: GetGenerationStatsQuery) -> Result<GenerationStats, DomainError> {
        let contents = self.contents.find_all_by_user(&query.user_id).await?;
        Ok(GenerationStats::from_contents(&contents))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryContentRepository;
    use crate::domain::content::{FeedbackType, GeneratedContent};
    use crate::domain::generation::ContextCategory;

    #[tokio::test]
    async fn tallies_feedback_per_generation() {
        let repo = Arc::new(InMemoryContentRepository::new());
        let user = UserId::new("writer-1").unwrap();
        let reactions = [
            Some(FeedbackType::Accepted),
            Some(FeedbackType::Accepted),
            Some(FeedbackType::Modified),
            None,
        ];
        for feedback in reactions {
            let mut content =
                GeneratedContent::new(user.clone(), "Prompt", ContextCategory::General, "Text.");
            if let Some(feedback) = feedback {
                content.record_feedback(feedback, None);
            }
            repo.save(&content).await.unwrap();
        }

        let stats = GetGenerationStatsHandler::new(repo)
            .handle(GetGenerationStatsQuery { user_id: user })
            .await
            .unwrap();

        assert_eq!(stats.total_generations, 4);
        assert_eq!(stats.accepted, 2);
        assert_eq!(stats.modified, 1);
        assert_eq!(stats.rejected, 0);
        assert_eq!(stats.acceptance_rate, 50.0);
        assert_eq!(stats.modification_rate, 25.0);
    }

    #[tokio::test]
    async fn no_generations_gives_zero_rates() {
        let stats = GetGenerationStatsHandler::new(Arc::new(InMemoryContentRepository::new()))
            .handle(GetGenerationStatsQuery {
                user_id: UserId::new("writer-1").unwrap(),
            })
            .await
            .unwrap();

        assert_eq!(stats, GenerationStats::default());
    }
}

//! In-memory generated content repository.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::content::GeneratedContent;
use crate::domain::foundation::{ContentId, DomainError, ErrorCode, UserId};
use crate::ports::GeneratedContentRepository;

/// Generations kept in insertion order, which is creation order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryContentRepository {
    contents: Arc<RwLock<Vec<GeneratedContent>>>,
}

impl InMemoryContentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GeneratedContentRepository for InMemoryContentRepository {
    async fn save(&self, content: &GeneratedContent) -> Result<(), DomainError> {
        self.contents.write().await.push(content.clone());
        Ok(())
    }

    async fn update(&self, content: &GeneratedContent) -> Result<(), DomainError> {
        let mut contents = self.contents.write().await;
        let existing = contents
            .iter_mut()
            .find(|c| c.id() == content.id())
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::ContentNotFound,
                    format!("Generated content not found: {}", content.id()),
                )
            })?;
        *existing = content.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: &ContentId) -> Result<Option<GeneratedContent>, DomainError> {
        let contents = self.contents.read().await;
        Ok(contents.iter().find(|c| c.id() == id).cloned())
    }

    async fn find_recent_by_user(
        &self,
        user_id: &UserId,
        limit: usize,
    ) -> Result<Vec<GeneratedContent>, DomainError> {
        let contents = self.contents.read().await;
        Ok(contents
            .iter()
            .rev()
            .filter(|c| c.user_id() == user_id)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn find_all_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<GeneratedContent>, DomainError> {
        let contents = self.contents.read().await;
        Ok(contents
            .iter()
            .filter(|c| c.user_id() == user_id)
            .cloned()
            .collect())
    }
}

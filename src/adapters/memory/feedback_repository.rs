//! In-memory feedback history.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::content::FeedbackRecord;
use crate::domain::foundation::{ContentId, DomainError};
use crate::ports::FeedbackRepository;

/// Append-only list of feedback records.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFeedbackRepository {
    records: Arc<RwLock<Vec<FeedbackRecord>>>,
}

impl InMemoryFeedbackRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records across all generations.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl FeedbackRepository for InMemoryFeedbackRepository {
    async fn save(&self, record: &FeedbackRecord) -> Result<(), DomainError> {
        self.records.write().await.push(record.clone());
        Ok(())
    }

    async fn find_by_content(
        &self,
        content_id: &ContentId,
    ) -> Result<Vec<FeedbackRecord>, DomainError> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|r| &r.content_id == content_id)
            .cloned()
            .collect())
    }
}

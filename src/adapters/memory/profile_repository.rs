//! In-memory style profile repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::style::StyleProfileRecord;
use crate::ports::StyleProfileRepository;

/// One profile record per user, keyed by user ID.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileRepository {
    profiles: Arc<RwLock<HashMap<UserId, StyleProfileRecord>>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored profiles (useful for tests)
    pub async fn clear(&self) {
        self.profiles.write().await.clear();
    }
}

#[async_trait]
impl StyleProfileRepository for InMemoryProfileRepository {
    async fn find_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<StyleProfileRecord>, DomainError> {
        Ok(self.profiles.read().await.get(user_id).cloned())
    }

    async fn save(&self, record: &StyleProfileRecord) -> Result<(), DomainError> {
        self.profiles
            .write()
            .await
            .insert(record.user_id.clone(), record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::style::{MetricsExtractor, ProfileAggregator};

    fn record(user: &str) -> StyleProfileRecord {
        let metrics = MetricsExtractor::extract("I am very happy today! The sun is bright.");
        let profile = ProfileAggregator::aggregate(&[metrics]).unwrap();
        StyleProfileRecord::new(UserId::new(user).unwrap(), profile)
    }

    #[tokio::test]
    async fn save_replaces_previous_record() {
        let repo = InMemoryProfileRepository::new();
        let first = record("writer-1");
        repo.save(&first).await.unwrap();

        let second = first.clone().replaced_with(first.profile.clone());
        repo.save(&second).await.unwrap();

        let stored = repo.find_by_user(&second.user_id).await.unwrap().unwrap();
        assert_eq!(stored.version, 2);
    }

    #[tokio::test]
    async fn missing_profile_is_none() {
        let repo = InMemoryProfileRepository::new();
        repo.save(&record("writer-1")).await.unwrap();
        repo.clear().await;

        let found = repo
            .find_by_user(&UserId::new("writer-1").unwrap())
            .await
            .unwrap();
        assert!(found.is_none());
    }
}

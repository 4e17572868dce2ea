//! In-memory writing sample repository.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::content::WritingSample;
use crate::domain::foundation::{DomainError, ErrorCode, SampleId, UserId};
use crate::ports::WritingSampleRepository;

/// Samples kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemorySampleRepository {
    samples: Arc<RwLock<Vec<WritingSample>>>,
}

impl InMemorySampleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored samples across all users.
    pub async fn len(&self) -> usize {
        self.samples.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.samples.read().await.is_empty()
    }
}

#[async_trait]
impl WritingSampleRepository for InMemorySampleRepository {
    async fn save(&self, sample: &WritingSample) -> Result<(), DomainError> {
        let mut samples = self.samples.write().await;
        match samples.iter_mut().find(|s| s.id() == sample.id()) {
            Some(existing) => *existing = sample.clone(),
            None => samples.push(sample.clone()),
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &SampleId) -> Result<Option<WritingSample>, DomainError> {
        let samples = self.samples.read().await;
        Ok(samples.iter().find(|s| s.id() == id).cloned())
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<WritingSample>, DomainError> {
        let samples = self.samples.read().await;
        Ok(samples
            .iter()
            .filter(|s| s.user_id() == user_id)
            .cloned()
            .collect())
    }

    async fn mark_analyzed(&self, ids: &[SampleId]) -> Result<(), DomainError> {
        let mut samples = self.samples.write().await;
        for sample in samples.iter_mut().filter(|s| ids.contains(s.id())) {
            sample.mark_analyzed();
        }
        Ok(())
    }

    async fn delete(&self, id: &SampleId) -> Result<(), DomainError> {
        let mut samples = self.samples.write().await;
        let before = samples.len();
        samples.retain(|s| s.id() != id);
        if samples.len() == before {
            return Err(DomainError::new(
                ErrorCode::SampleNotFound,
                format!("Sample not found: {}", id),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "Mornings at the harbour are slow and grey, and I like them that way.";

    fn sample(user: &str, title: &str) -> WritingSample {
        WritingSample::new(UserId::new(user).unwrap(), title, TEXT, 10).unwrap()
    }

    #[tokio::test]
    async fn lists_user_samples_in_upload_order() {
        let repo = InMemorySampleRepository::new();
        let first = sample("writer-1", "First");
        let other = sample("writer-2", "Other");
        let second = sample("writer-1", "Second");

        repo.save(&first).await.unwrap();
        repo.save(&other).await.unwrap();
        repo.save(&second).await.unwrap();

        let found = repo.find_by_user(first.user_id()).await.unwrap();
        let titles: Vec<_> = found.iter().map(|s| s.title()).collect();
        assert_eq!(titles, vec!["First", "Second"]);
        assert_eq!(repo.len().await, 3);
    }

    #[tokio::test]
    async fn mark_analyzed_flags_only_given_ids() {
        let repo = InMemorySampleRepository::new();
        let a = sample("writer-1", "A");
        let b = sample("writer-1", "B");
        repo.save(&a).await.unwrap();
        repo.save(&b).await.unwrap();

        repo.mark_analyzed(&[*a.id(), SampleId::new()]).await.unwrap();

        assert!(repo.find_by_id(a.id()).await.unwrap().unwrap().is_analyzed());
        assert!(!repo.find_by_id(b.id()).await.unwrap().unwrap().is_analyzed());
    }

    #[tokio::test]
    async fn delete_missing_sample_is_not_found() {
        let repo = InMemorySampleRepository::new();
        let a = sample("writer-1", "A");
        repo.save(&a).await.unwrap();

        repo.delete(a.id()).await.unwrap();
        assert!(repo.is_empty().await);

        let err = repo.delete(a.id()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::SampleNotFound);
    }
}

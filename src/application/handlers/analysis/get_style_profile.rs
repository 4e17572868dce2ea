//! GetStyleProfile - Query handler for a user's stored profile.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::style::StyleProfileRecord;
use crate::ports::StyleProfileRepository;

/// Query for a user's style profile.
#[derive(Debug, Clone)]
pub struct GetStyleProfileQuery {
    pub user_id: UserId,
}

/// Handler for reading profiles.
pub struct GetStyleProfileHandler {
    profiles: Arc<dyn StyleProfileRepository>,
}

impl GetStyleProfileHandler {
    pub fn new(profiles: Arc<dyn StyleProfileRepository>) -> Self {
        Self { profiles }
    }

    pub async fn handle(
        &self,
        query: GetStyleProfileQuery,
    ) -> Result<StyleProfileRecord, DomainError> {
        self.profiles
            .find_by_user(&query.user_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::StyleProfileNotFound,
                    "No style profile found. Please upload and analyze writing samples first.",
                )
                .with_detail("user_id", query.user_id.to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryProfileRepository;
    use crate::domain::style::{MetricsExtractor, ProfileAggregator};

    #[tokio::test]
    async fn returns_stored_record() {
        let repo = Arc::new(InMemoryProfileRepository::new());
        let user = UserId::new("writer-1").unwrap();
        let profile =
            ProfileAggregator::aggregate(&[MetricsExtractor::extract("Short and sweet.")]).unwrap();
        repo.save(&StyleProfileRecord::new(user.clone(), profile))
            .await
            .unwrap();

        let record = GetStyleProfileHandler::new(repo)
            .handle(GetStyleProfileQuery { user_id: user })
            .await
            .unwrap();

        assert_eq!(record.profile.sample_count, 1);
    }

    #[tokio::test]
    async fn missing_profile_is_not_found() {
        let err = GetStyleProfileHandler::new(Arc::new(InMemoryProfileRepository::new()))
            .handle(GetStyleProfileQuery {
                user_id: UserId::new("writer-1").unwrap(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::StyleProfileNotFound);
    }
}

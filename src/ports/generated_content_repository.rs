//! Generated content repository port.

use async_trait::async_trait;

use crate::domain::content::GeneratedContent;
use crate::domain::foundation::{ContentId, DomainError, UserId};

/// Repository for style-conditioned generations.
#[async_trait]
pub trait GeneratedContentRepository: Send + Sync {
    /// Save a new generation.
    async fn save(&self, content: &GeneratedContent) -> Result<(), DomainError>;

    /// Update feedback fields of an existing generation.
    ///
    /// # Errors
    ///
    /// - `ContentNotFound` if the generation doesn't exist
    async fn update(&self, content: &GeneratedContent) -> Result<(), DomainError>;

    /// Find a generation by its ID.
    async fn find_by_id(&self, id: &ContentId) -> Result<Option<GeneratedContent>, DomainError>;

    /// The newest `limit` generations of a user, newest first.
    async fn find_recent_by_user(
        &self,
        user_id: &UserId,
        limit: usize,
    ) -> Result<Vec<GeneratedContent>, DomainError>;

    /// Every generation of a user, in no particular order.
    async fn find_all_by_user(&self, user_id: &UserId)
        -> Result<Vec<GeneratedContent>, DomainError>;
}

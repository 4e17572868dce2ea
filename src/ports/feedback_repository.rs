//! Feedback history repository port (append-only).

use async_trait::async_trait;

use crate::domain::content::FeedbackRecord;
use crate::domain::foundation::{ContentId, DomainError};

/// Append-only store of feedback submissions.
#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    /// Append a feedback record.
    async fn save(&self, record: &FeedbackRecord) -> Result<(), DomainError>;

    /// All feedback for one generation, oldest first.
    async fn find_by_content(&self, content_id: &ContentId)
        -> Result<Vec<FeedbackRecord>, DomainError>;
}

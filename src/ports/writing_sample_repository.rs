//! Writing sample repository port.
//!
//! Samples are user-scoped; listing returns them in upload order, which is
//! also the order the aggregator sees them in.

use async_trait::async_trait;

use crate::domain::content::WritingSample;
use crate::domain::foundation::{DomainError, SampleId, UserId};

/// Repository port for uploaded writing samples.
#[async_trait]
pub trait WritingSampleRepository: Send + Sync {
    /// Save a new sample.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn save(&self, sample: &WritingSample) -> Result<(), DomainError>;

    /// Find a sample by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &SampleId) -> Result<Option<WritingSample>, DomainError>;

    /// All samples of a user, oldest first.
    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<WritingSample>, DomainError>;

    /// Flag the given samples as analyzed.
    ///
    /// Unknown IDs are ignored.
    async fn mark_analyzed(&self, ids: &[SampleId]) -> Result<(), DomainError>;

    /// Delete a sample.
    ///
    /// # Errors
    ///
    /// - `SampleNotFound` if the sample doesn't exist
    async fn delete(&self, id: &SampleId) -> Result<(), DomainError>;
}

//! ListSamples - Query handler for a user's writing samples.

use std::sync::Arc;

use crate::domain::content::WritingSample;
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::WritingSampleRepository;

/// Query for all samples of a user.
#[derive(Debug, Clone)]
pub struct ListSamplesQuery {
    pub user_id: UserId,
}

/// Handler for listing samples.
pub struct ListSamplesHandler {
    samples: Arc<dyn WritingSampleRepository>,
}

impl ListSamplesHandler {
    pub fn new(samples: Arc<dyn WritingSampleRepository>) -> Self {
        Self { samples }
    }

    /// Samples in upload order.
    pub async fn handle(&self, query: ListSamplesQuery) -> Result<Vec<WritingSample>, DomainError> {
        self.samples.find_by_user(&query.user_id).await
    }
}

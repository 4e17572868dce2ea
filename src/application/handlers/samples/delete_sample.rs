//! DeleteSample - Command handler for removing a writing sample.
//!
//! Deleting a sample does not touch an existing style profile; the profile
//! changes on the next analysis.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{DomainError, ErrorCode, OwnedByUser, SampleId, UserId};
use crate::ports::WritingSampleRepository;

/// Command to delete a sample.
#[derive(Debug, Clone)]
pub struct DeleteSampleCommand {
    pub user_id: UserId,
    pub sample_id: SampleId,
}

/// Handler for deleting samples.
pub struct DeleteSampleHandler {
    samples: Arc<dyn WritingSampleRepository>,
}

impl DeleteSampleHandler {
    pub fn new(samples: Arc<dyn WritingSampleRepository>) -> Self {
        Self { samples }
    }

    pub async fn handle(&self, cmd: DeleteSampleCommand) -> Result<(), DomainError> {
        let sample = self
            .samples
            .find_by_id(&cmd.sample_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::SampleNotFound,
                    format!("Sample not found: {}", cmd.sample_id),
                )
            })?;

        sample.check_ownership(&cmd.user_id)?;

        self.samples.delete(&cmd.sample_id).await?;

        info!(user_id = %cmd.user_id, sample_id = %cmd.sample_id, "Writing sample deleted");
        Ok(())
    }
}

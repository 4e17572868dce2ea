//! UploadSample - Command handler for storing a writing sample.

use std::sync::Arc;

use tracing::info;

use crate::domain::content::{WritingSample, MIN_SAMPLE_CHARS};
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::WritingSampleRepository;

/// Command to upload a writing sample.
#[derive(Debug, Clone)]
pub struct UploadSampleCommand {
    pub user_id: UserId,
    pub title: String,
    pub content: String,
}

/// Handler for uploading samples.
pub struct UploadSampleHandler {
    samples: Arc<dyn WritingSampleRepository>,
    min_chars: usize,
}

impl UploadSampleHandler {
    pub fn new(samples: Arc<dyn WritingSampleRepository>) -> Self {
        Self {
            samples,
            min_chars: MIN_SAMPLE_CHARS,
        }
    }

    /// Overrides the minimum content length.
    pub fn with_min_chars(mut self, min_chars: usize) -> Self {
        self.min_chars = min_chars;
        self
    }

    pub async fn handle(&self, cmd: UploadSampleCommand) -> Result<WritingSample, DomainError> {
        let sample = WritingSample::new(cmd.user_id, cmd.title, cmd.content, self.min_chars)?;

        self.samples.save(&sample).await?;

        info!(
            user_id = %sample.user_id(),
            sample_id = %sample.id(),
            chars = sample.content().chars().count(),
            "Writing sample uploaded"
        );
        Ok(sample)
    }
}

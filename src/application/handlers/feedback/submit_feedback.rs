//! SubmitFeedback - Command handler recording a reaction to generated content.
//!
//! One history record is appended, then the generation's feedback fields
//! are updated. Edits from users with a profile are analyzed for adjustment
//! signals, which are stored with the record.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::content::{FeedbackRecord, FeedbackType};
use crate::domain::foundation::{ContentId, DomainError, ErrorCode, FeedbackId, OwnedByUser, UserId};
use crate::domain::generation::{FeedbackAnalysis, FeedbackAnalyzer};
use crate::ports::{FeedbackRepository, GeneratedContentRepository, StyleProfileRepository};

/// Command to submit feedback on a generation.
#[derive(Debug, Clone)]
pub struct SubmitFeedbackCommand {
    pub user_id: UserId,
    pub content_id: ContentId,
    pub feedback_type: FeedbackType,
    pub modified_content: Option<String>,
}

/// Result of submitting feedback.
#[derive(Debug, Clone)]
pub struct SubmitFeedbackResult {
    pub feedback_id: FeedbackId,
    /// Present when the edit was analyzed.
    pub analysis: Option<FeedbackAnalysis>,
}

/// Handler for feedback submission.
pub struct SubmitFeedbackHandler {
    contents: Arc<dyn GeneratedContentRepository>,
    profiles: Arc<dyn StyleProfileRepository>,
    feedback: Arc<dyn FeedbackRepository>,
}

impl SubmitFeedbackHandler {
    pub fn new(
        contents: Arc<dyn GeneratedContentRepository>,
        profiles: Arc<dyn StyleProfileRepository>,
        feedback: Arc<dyn FeedbackRepository>,
    ) -> Self {
        Self {
            contents,
            profiles,
            feedback,
        }
    }

    pub async fn handle(&self, cmd: SubmitFeedbackCommand) -> Result<SubmitFeedbackResult, DomainError> {
        // 1. Load and authorize
        let mut content = self
            .contents
            .find_by_id(&cmd.content_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::ContentNotFound,
                    format!("Generated content not found: {}", cmd.content_id),
                )
            })?;
        content.check_ownership(&cmd.user_id)?;

        let modified = cmd
            .modified_content
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty());

        // 2. Analyze edits when there is a profile to adapt
        let analysis = match (cmd.feedback_type, modified) {
            (FeedbackType::Modified, Some(modified)) => {
                if self.profiles.find_by_user(&cmd.user_id).await?.is_some() {
                    let analysis =
                        FeedbackAnalyzer::analyze(content.prompt(), content.generated_text(), modified);
                    debug!(
                        content_id = %cmd.content_id,
                        signals = analysis.style_adjustments.len(),
                        "Analyzed user edit"
                    );
                    Some(analysis)
                } else {
                    None
                }
            }
            _ => None,
        };

        // 3. Append history before the generation shows any feedback
        let record = FeedbackRecord::new(
            cmd.user_id.clone(),
            cmd.content_id,
            cmd.feedback_type,
            content.generated_text(),
            modified.map(str::to_string),
            analysis.clone(),
        );
        self.feedback.save(&record).await?;

        // 4. Update the generation
        content.record_feedback(cmd.feedback_type, modified);
        self.contents.update(&content).await?;

        info!(
            user_id = %cmd.user_id,
            content_id = %cmd.content_id,
            feedback = %cmd.feedback_type,
            "Feedback recorded"
        );

        Ok(SubmitFeedbackResult {
            feedback_id: record.id,
            analysis,
        })
    }
}

//! WritingSample - a piece of the user's own writing.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{OwnedByUser, SampleId, Timestamp, UserId, ValidationError};

/// Default minimum sample length, in characters after trimming.
pub const MIN_SAMPLE_CHARS: usize = 50;

/// A text the user uploaded so their style can be measured.
///
/// # Invariants
///
/// - `title` is non-empty after trimming
/// - `content` is at least the configured minimum length after trimming
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WritingSample {
    id: SampleId,
    user_id: UserId,
    title: String,
    content: String,
    uploaded_at: Timestamp,
    analyzed: bool,
}

impl WritingSample {
    /// Validates and creates a new, not yet analyzed sample.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the title is blank
    /// - `TooShort` if the trimmed content has fewer than `min_chars` characters
    pub fn new(
        user_id: UserId,
        title: impl Into<String>,
        content: impl Into<String>,
        min_chars: usize,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        let content = content.into();

        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        let actual = content.trim().chars().count();
        if actual < min_chars {
            return Err(ValidationError::too_short("content", min_chars, actual));
        }

        Ok(Self {
            id: SampleId::new(),
            user_id,
            title: title.trim().to_string(),
            content,
            uploaded_at: Timestamp::now(),
            analyzed: false,
        })
    }

    pub fn id(&self) -> &SampleId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn uploaded_at(&self) -> &Timestamp {
        &self.uploaded_at
    }

    /// True once the sample has fed a profile.
    pub fn is_analyzed(&self) -> bool {
        self.analyzed
    }

    pub fn mark_analyzed(&mut self) {
        self.analyzed = true;
    }
}

impl OwnedByUser for WritingSample {
    fn owner_id(&self) -> &UserId {
        &self.user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = "The river was quiet that morning, and the mist hung low over the water.";

    fn user() -> UserId {
        UserId::new("writer-1").unwrap()
    }

    #[test]
    fn new_sample_is_unanalyzed() {
        let sample = WritingSample::new(user(), "Morning", BODY, MIN_SAMPLE_CHARS).unwrap();
        assert_eq!(sample.title(), "Morning");
        assert_eq!(sample.content(), BODY);
        assert!(!sample.is_analyzed());
    }

    #[test]
    fn blank_title_is_rejected() {
        let err = WritingSample::new(user(), "   ", BODY, MIN_SAMPLE_CHARS).unwrap_err();
        assert_eq!(err, ValidationError::empty_field("title"));
    }

    #[test]
    fn short_content_is_rejected_after_trimming() {
        let padded = format!("   {}   ", "x".repeat(49));
        let err = WritingSample::new(user(), "t", padded, MIN_SAMPLE_CHARS).unwrap_err();
        assert_eq!(err, ValidationError::too_short("content", 50, 49));
    }

    #[test]
    fn exactly_minimum_length_is_accepted() {
        assert!(WritingSample::new(user(), "t", "x".repeat(50), MIN_SAMPLE_CHARS).is_ok());
    }

    #[test]
    fn mark_analyzed_sets_flag() {
        let mut sample = WritingSample::new(user(), "t", BODY, MIN_SAMPLE_CHARS).unwrap();
        sample.mark_analyzed();
        assert!(sample.is_analyzed());
    }

    #[test]
    fn sample_is_owned_by_uploader() {
        let sample = WritingSample::new(user(), "t", BODY, MIN_SAMPLE_CHARS).unwrap();
        assert!(sample.is_owner(&user()));
        assert!(!sample.is_owner(&UserId::new("someone-else").unwrap()));
    }
}

//! User feedback on generated content.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ContentId, FeedbackId, Timestamp, UserId, ValidationError};
use crate::domain::generation::FeedbackAnalysis;

/// How the user reacted to a generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackType {
    Accepted,
    Modified,
    Rejected,
}

impl FeedbackType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accepted => "accepted",
            Self::Modified => "modified",
            Self::Rejected => "rejected",
        }
    }
}

impl FromStr for FeedbackType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "accepted" => Ok(Self::Accepted),
            "modified" => Ok(Self::Modified),
            "rejected" => Ok(Self::Rejected),
            other => Err(ValidationError::invalid_format(
                "feedback_type",
                format!("expected accepted, modified or rejected, got '{}'", other),
            )),
        }
    }
}

impl std::fmt::Display for FeedbackType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Append-only history entry for one feedback submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub id: FeedbackId,
    pub user_id: UserId,
    pub content_id: ContentId,
    pub feedback_type: FeedbackType,
    pub original_text: String,
    pub modified_text: Option<String>,
    /// Present only for `modified` feedback from a user with a profile.
    pub analysis: Option<FeedbackAnalysis>,
    pub recorded_at: Timestamp,
}

impl FeedbackRecord {
    pub fn new(
        user_id: UserId,
        content_id: ContentId,
        feedback_type: FeedbackType,
        original_text: impl Into<String>,
        modified_text: Option<String>,
        analysis: Option<FeedbackAnalysis>,
    ) -> Self {
        Self {
            id: FeedbackId::new(),
            user_id,
            content_id,
            feedback_type,
            original_text: original_text.into(),
            modified_text,
            analysis,
            recorded_at: Timestamp::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_types_case_insensitively() {
        assert_eq!("accepted".parse::<FeedbackType>().unwrap(), FeedbackType::Accepted);
        assert_eq!(" Modified ".parse::<FeedbackType>().unwrap(), FeedbackType::Modified);
        assert_eq!("REJECTED".parse::<FeedbackType>().unwrap(), FeedbackType::Rejected);
    }

    #[test]
    fn unknown_type_is_invalid_format() {
        let err = "loved".parse::<FeedbackType>().unwrap_err();
        assert_eq!(err.field(), "feedback_type");
        assert!(err.to_string().contains("loved"));
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&FeedbackType::Modified).unwrap(), "\"modified\"");
        assert_eq!(FeedbackType::Rejected.to_string(), "rejected");
    }
}

//! Feedback handlers: submission, history and statistics.

mod get_generation_history;
mod get_generation_stats;
mod submit_feedback;

pub use get_generation_history::{
    GenerationHistoryEntry, GetGenerationHistoryHandler, GetGenerationHistoryQuery,
    DEFAULT_HISTORY_LIMIT, MAX_HISTORY_LIMIT,
};
pub use get_generation_stats::{GetGenerationStatsHandler, GetGenerationStatsQuery};
pub use submit_feedback::{SubmitFeedbackCommand, SubmitFeedbackHandler, SubmitFeedbackResult};

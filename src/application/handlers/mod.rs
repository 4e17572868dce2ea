//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod analysis;
pub mod feedback;
pub mod generation;
pub mod samples;

pub use analysis::{
    AnalyzeSamplesCommand, AnalyzeSamplesHandler, AnalyzeSamplesResult, GetStyleProfileHandler,
    GetStyleProfileQuery,
};
pub use feedback::{
    GenerationHistoryEntry, GetGenerationHistoryHandler, GetGenerationHistoryQuery,
    GetGenerationStatsHandler, GetGenerationStatsQuery, SubmitFeedbackCommand,
    SubmitFeedbackHandler, SubmitFeedbackResult, DEFAULT_HISTORY_LIMIT, MAX_HISTORY_LIMIT,
};
pub use generation::{GenerateContentCommand, GenerateContentHandler, MIN_PROMPT_CHARS};
pub use samples::{
    DeleteSampleCommand, DeleteSampleHandler, ListSamplesHandler, ListSamplesQuery,
    UploadSampleCommand, UploadSampleHandler,
};

//! Content module - samples, generations and feedback records.

mod feedback;
mod generated;
mod sample;
mod stats;

pub use feedback::{FeedbackRecord, FeedbackType};
pub use generated::GeneratedContent;
pub use sample::{WritingSample, MIN_SAMPLE_CHARS};
pub use stats::GenerationStats;

//! Generation module - conditioning, refining and learning from edits.
//!
//! All pure: the only I/O in generation lives behind the
//! [`AIProvider`](crate::ports::AIProvider) port.

mod feedback;
mod prompt;
mod refiner;
mod templates;

pub use feedback::{AdjustmentSignal, FeedbackAnalysis, FeedbackAnalyzer};
pub use prompt::{ContextCategory, StylePromptBuilder};
pub use refiner::{RefinementTarget, TextRefiner};
pub use templates::{offline_response, OfflineTemplate};

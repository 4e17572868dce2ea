//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, ownership)
//! - `style` - Pure services measuring writing style (extraction, aggregation)
//! - `generation` - Pure services around text generation (prompting, refining, feedback)
//! - `content` - Records for samples, generated content and feedback

pub mod content;
pub mod foundation;
pub mod generation;
pub mod style;

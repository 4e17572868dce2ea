//! In-memory repository adapters.
//!
//! Useful for testing, the CLI, and single-process development. Each store
//! is an `Arc<RwLock<_>>`, so clones share state.

mod content_repository;
mod feedback_repository;
mod profile_repository;
mod sample_repository;

pub use content_repository::InMemoryContentRepository;
pub use feedback_repository::InMemoryFeedbackRepository;
pub use profile_repository::InMemoryProfileRepository;
pub use sample_repository::InMemorySampleRepository;

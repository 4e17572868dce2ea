//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Completion providers (Ollama, offline templates, fallback chain, mock)
//! - `memory` - In-memory repositories
//! - `filesystem` - JSON-file style profile storage

pub mod ai;
pub mod filesystem;
pub mod memory;

pub use filesystem::FsProfileRepository;
pub use memory::{
    InMemoryContentRepository, InMemoryFeedbackRepository, InMemoryProfileRepository,
    InMemorySampleRepository,
};

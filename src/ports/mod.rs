//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Completion
//!
//! - `AIProvider` - Text completion backend (local model, offline template, chain)
//!
//! ## Persistence
//!
//! - `WritingSampleRepository` - Uploaded writing samples
//! - `StyleProfileRepository` - One style profile per user
//! - `GeneratedContentRepository` - Generations and their feedback state
//! - `FeedbackRepository` - Append-only feedback history

mod ai_provider;
mod feedback_repository;
mod generated_content_repository;
mod style_profile_repository;
mod writing_sample_repository;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, ProviderInfo, RequestMetadata,
    TokenUsage,
};
pub use feedback_repository::FeedbackRepository;
pub use generated_content_repository::GeneratedContentRepository;
pub use style_profile_repository::StyleProfileRepository;
pub use writing_sample_repository::WritingSampleRepository;

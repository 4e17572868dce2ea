//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).
//!
//! - `generator` - `StyleConditionedGenerator`, the only async domain-facing service
//! - `handlers` - one handler per command or query
//! - `services` - wiring of handlers, repositories and the completion chain

pub mod generator;
pub mod handlers;
pub mod services;

pub use generator::{GeneratedText, GenerationError, GeneratorSettings, StyleConditionedGenerator};
pub use handlers::*;
pub use services::{completion_chain, profile_repository, EcritoireServices, Repositories};

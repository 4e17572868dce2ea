//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, and error types that form the
//! vocabulary of the Écritoire domain.

mod errors;
mod ids;
mod ownership;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ContentId, FeedbackId, SampleId, UserId};
pub use ownership::OwnedByUser;
pub use timestamp::Timestamp;

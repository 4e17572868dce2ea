//! Style profile repository port.
//!
//! One profile record per user. `save` replaces the whole record; there are
//! no partial updates.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::style::StyleProfileRecord;

/// Repository for per-user style profiles.
#[async_trait]
pub trait StyleProfileRepository: Send + Sync {
    /// Find the profile record of a user.
    async fn find_by_user(&self, user_id: &UserId)
        -> Result<Option<StyleProfileRecord>, DomainError>;

    /// Create or wholesale replace a user's profile record.
    async fn save(&self, record: &StyleProfileRecord) -> Result<(), DomainError>;
}

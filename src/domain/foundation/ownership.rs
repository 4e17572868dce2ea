//! Ownership check for user-owned records.
//!
//! Samples and generated content each belong to exactly one user. Handlers
//! call `check_ownership()` before touching them.

use super::{DomainError, ErrorCode, UserId};

/// A record with a single owning user.
pub trait OwnedByUser {
    /// Returns the ID of the user who owns this record.
    fn owner_id(&self) -> &UserId;

    /// Returns `true` if `user_id` owns this record.
    fn is_owner(&self, user_id: &UserId) -> bool {
        self.owner_id() == user_id
    }

    /// Fails with `Forbidden` unless `user_id` owns this record.
    fn check_ownership(&self, user_id: &UserId) -> Result<(), DomainError> {
        if self.is_owner(user_id) {
            Ok(())
        } else {
            Err(
                DomainError::new(ErrorCode::Forbidden, "User does not own this resource")
                    .with_detail("owner_id", self.owner_id().to_string())
                    .with_detail("requested_by", user_id.to_string()),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Draft {
        owner: UserId,
    }

    impl OwnedByUser for Draft {
        fn owner_id(&self) -> &UserId {
            &self.owner
        }
    }

    fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    #[test]
    fn owner_passes_check() {
        let draft = Draft { owner: user("writer-1") };
        assert!(draft.is_owner(&user("writer-1")));
        assert!(draft.check_ownership(&user("writer-1")).is_ok());
    }

    #[test]
    fn non_owner_is_forbidden_with_details() {
        let draft = Draft { owner: user("writer-1") };
        let err = draft.check_ownership(&user("writer-2")).unwrap_err();

        assert_eq!(err.code, ErrorCode::Forbidden);
        assert!(err.message.contains("does not own"));
        assert_eq!(err.details.get("owner_id"), Some(&"writer-1".to_string()));
        assert_eq!(err.details.get("requested_by"), Some(&"writer-2".to_string()));
    }
}

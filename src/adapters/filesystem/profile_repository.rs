//! Filesystem storage adapter for style profiles.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::style::StyleProfileRecord;
use crate::ports::StyleProfileRepository;

const PROFILE_FILE: &str = "style_profile.json";

/// Filesystem-based profile storage
///
/// Stores one JSON record per user in a configurable base directory:
/// {base_dir}/profiles/{user_id}/style_profile.json
#[derive(Debug, Clone)]
pub struct FsProfileRepository {
    base_dir: PathBuf,
}

impl FsProfileRepository {
    /// Create new filesystem storage with base directory
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// Directory of one user. IDs that are not a single path component are refused.
    fn user_dir(&self, user_id: &UserId) -> Result<PathBuf, DomainError> {
        let id = user_id.as_str();
        if id == "." || id == ".." || id.contains(['/', '\\']) {
            return Err(DomainError::validation(
                "user_id",
                "User ID cannot be used as a directory name",
            ));
        }
        Ok(self.base_dir.join("profiles").join(id))
    }

    /// Full path to a user's profile file
    pub fn profile_path(&self, user_id: &UserId) -> Result<PathBuf, DomainError> {
        Ok(self.user_dir(user_id)?.join(PROFILE_FILE))
    }
}

#[async_trait]
impl StyleProfileRepository for FsProfileRepository {
    async fn find_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<StyleProfileRecord>, DomainError> {
        let path = self.profile_path(user_id)?;

        let json = match fs::read_to_string(&path).await {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(DomainError::storage("Failed to read profile", e)),
        };

        serde_json::from_str(&json)
            .map(Some)
            .map_err(|e| {
                DomainError::storage("Corrupt profile file", e)
                    .with_detail("path", path.display().to_string())
            })
    }

    async fn save(&self, record: &StyleProfileRecord) -> Result<(), DomainError> {
        let user_dir = self.user_dir(&record.user_id)?;
        let file_path = user_dir.join(PROFILE_FILE);

        fs::create_dir_all(&user_dir)
            .await
            .map_err(|e| DomainError::storage("Failed to create directory", e))?;

        let json = serde_json::to_string_pretty(record)
            .map_err(|e| DomainError::storage("Failed to serialize profile", e))?;

        // Write to a temporary file, then rename over the old record
        let temp_path = file_path.with_extension("tmp");
        fs::write(&temp_path, json)
            .await
            .map_err(|e| DomainError::storage("Failed to write temporary file", e))?;
        fs::rename(&temp_path, &file_path)
            .await
            .map_err(|e| DomainError::storage("Failed to rename file", e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::style::{MetricsExtractor, ProfileAggregator};
    use tempfile::TempDir;

    fn test_user_id() -> UserId {
        UserId::new("writer@example.com").unwrap()
    }

    fn test_record() -> StyleProfileRecord {
        let metrics = MetricsExtractor::extract(
            "However, the committee shall therefore reconvene. Furthermore, minutes will be kept.",
        );
        StyleProfileRecord::new(test_user_id(), ProfileAggregator::aggregate(&[metrics]).unwrap())
    }

    #[tokio::test]
    async fn save_and_read_back() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FsProfileRepository::new(temp_dir.path());
        let record = test_record();

        repo.save(&record).await.unwrap();

        assert!(repo.profile_path(&record.user_id).unwrap().exists());
        let loaded = repo.find_by_user(&record.user_id).await.unwrap().unwrap();
        assert_eq!(loaded.version, 1);
        assert_eq!(loaded.profile.sample_count, 1);
        assert_eq!(loaded.profile.style_embedding, record.profile.style_embedding);
    }

    #[tokio::test]
    async fn missing_profile_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FsProfileRepository::new(temp_dir.path());

        assert!(repo.find_by_user(&test_user_id()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_overwrites_and_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FsProfileRepository::new(temp_dir.path());
        let first = test_record();
        repo.save(&first).await.unwrap();

        let second = first.clone().replaced_with(first.profile.clone());
        repo.save(&second).await.unwrap();

        let loaded = repo.find_by_user(&second.user_id).await.unwrap().unwrap();
        assert_eq!(loaded.version, 2);
        assert_eq!(loaded.created_at, first.created_at);

        let path = repo.profile_path(&second.user_id).unwrap();
        assert!(!path.with_extension("tmp").exists());
    }

    #[tokio::test]
    async fn corrupt_file_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FsProfileRepository::new(temp_dir.path());
        let path = repo.profile_path(&test_user_id()).unwrap();
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{not json").unwrap();

        let err = repo.find_by_user(&test_user_id()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::StorageError);
        assert!(err.details.contains_key("cause"));
        assert_eq!(err.details.get("path"), Some(&path.display().to_string()));
    }

    #[tokio::test]
    async fn path_like_user_id_is_refused() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FsProfileRepository::new(temp_dir.path());

        let err = repo
            .find_by_user(&UserId::new("../escape").unwrap())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }
}

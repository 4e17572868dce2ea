//! Storage configuration

use serde::Deserialize;
use std::path::PathBuf;

/// Where style profiles are kept
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct StorageConfig {
    /// Base directory for JSON profile files; in memory when unset
    pub profile_dir: Option<PathBuf>,
}

impl StorageConfig {
    /// True when profiles persist to disk
    pub fn is_persistent(&self) -> bool {
        self.profile_dir.is_some()
    }
}

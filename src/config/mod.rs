//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `ECRITOIRE` prefix and nested values use double underscores as separators.
//! Every section has defaults, so an empty environment is a valid configuration.
//!
//! # Example
//!
//! ```no_run
//! use ecritoire::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Ollama at {}", config.ai.base_url);
//! ```

mod ai;
mod analysis;
mod error;
mod logging;
mod storage;

pub use ai::AiConfig;
pub use analysis::AnalysisConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::{LoggingConfig, DEFAULT_LOG_FILTER};
pub use storage::StorageConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Completion chain (Ollama models, timeouts, offline fallback)
    #[serde(default)]
    pub ai: AiConfig,

    /// Input limits
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Profile persistence
    #[serde(default)]
    pub storage: StorageConfig,

    /// Log output
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `ECRITOIRE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `ECRITOIRE__AI__PRIMARY_MODEL=llama2:13b-chat` -> `ai.primary_model`
    /// - `ECRITOIRE__STORAGE__PROFILE_DIR=/var/lib/ecritoire` -> `storage.profile_dir`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("ECRITOIRE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.ai.validate()?;
        self.analysis.validate()?;
        Ok(())
    }
}

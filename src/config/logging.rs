//! Logging configuration

use serde::Deserialize;

/// Filter used when neither the config nor `RUST_LOG` sets one
pub const DEFAULT_LOG_FILTER: &str = "ecritoire=info";

/// Logging configuration
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,

    /// `EnvFilter` directive overriding the default
    pub filter: Option<String>,
}

impl LoggingConfig {
    /// The directive to build an `EnvFilter` from
    pub fn filter_directive(&self) -> &str {
        self.filter
            .as_deref()
            .filter(|f| !f.trim().is_empty())
            .unwrap_or(DEFAULT_LOG_FILTER)
    }
}

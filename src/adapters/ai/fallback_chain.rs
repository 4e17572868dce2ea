//! Fallback Chain Provider - an ordered list of completion strategies.
//!
//! Strategies are tried first to last, each under its own timeout. The first
//! success wins; any failure moves on to the next strategy. The usual chain is
//! large local model, smaller local model, offline template.
//!
//! # Example
//!
//! ```ignore
//! let provider = FallbackChainProvider::new()
//!     .with_strategy("primary", Arc::new(big_model), Duration::from_secs(120))
//!     .with_strategy("fallback", Arc::new(small_model), Duration::from_secs(120))
//!     .with_strategy("offline", Arc::new(OfflineTemplateProvider::new()), Duration::from_secs(1));
//! ```

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::ports::{AIError, AIProvider, CompletionRequest, CompletionResponse, ProviderInfo};

/// Events for fallback monitoring.
pub mod events {
    use serde::{Deserialize, Serialize};

    use crate::domain::foundation::Timestamp;
    use crate::ports::TokenUsage;

    /// Emitted when a strategy succeeds.
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct CompletionServed {
        pub strategy: String,
        pub model: String,
        pub usage: TokenUsage,
        pub request_id: String,
        pub occurred_at: Timestamp,
    }

    impl CompletionServed {
        pub fn new(
            strategy: impl Into<String>,
            model: impl Into<String>,
            usage: TokenUsage,
            request_id: impl Into<String>,
        ) -> Self {
            Self {
                strategy: strategy.into(),
                model: model.into(),
                usage,
                request_id: request_id.into(),
                occurred_at: Timestamp::now(),
            }
        }
    }

    /// Emitted when the chain moves from one strategy to the next.
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct StrategyFallback {
        pub failed_strategy: String,
        pub next_strategy: String,
        pub reason: String,
        pub request_id: String,
        pub occurred_at: Timestamp,
    }

    impl StrategyFallback {
        pub fn new(
            failed: impl Into<String>,
            next: impl Into<String>,
            reason: impl Into<String>,
            request_id: impl Into<String>,
        ) -> Self {
            Self {
                failed_strategy: failed.into(),
                next_strategy: next.into(),
                reason: reason.into(),
                request_id: request_id.into(),
                occurred_at: Timestamp::now(),
            }
        }
    }
}

/// Callback for receiving chain events.
pub trait AIEventCallback: Send + Sync {
    /// Called when a strategy produced the completion.
    fn on_completion(&self, event: events::CompletionServed);

    /// Called when the chain falls through to the next strategy.
    fn on_fallback(&self, event: events::StrategyFallback);
}

/// No-op event callback for when event tracking isn't needed.
#[derive(Debug, Clone, Copy)]
pub struct NoOpEventCallback;

impl AIEventCallback for NoOpEventCallback {
    fn on_completion(&self, _event: events::CompletionServed) {}
    fn on_fallback(&self, _event: events::StrategyFallback) {}
}

/// One step of the chain.
#[derive(Clone)]
pub struct CompletionStrategy {
    name: String,
    provider: Arc<dyn AIProvider>,
    timeout: Duration,
}

impl CompletionStrategy {
    pub fn new(name: impl Into<String>, provider: Arc<dyn AIProvider>, timeout: Duration) -> Self {
        Self {
            name: name.into(),
            provider,
            timeout,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn attempt(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        match tokio::time::timeout(self.timeout, self.provider.complete(request)).await {
            Ok(result) => result,
            Err(_) => Err(AIError::Timeout {
                timeout_secs: self.timeout.as_secs(),
            }),
        }
    }
}

impl std::fmt::Debug for CompletionStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionStrategy")
            .field("name", &self.name)
            .field("provider", &self.provider.provider_info())
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// AI provider trying an ordered list of strategies.
pub struct FallbackChainProvider {
    strategies: Vec<CompletionStrategy>,
    event_callback: Arc<dyn AIEventCallback>,
}

impl Default for FallbackChainProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl FallbackChainProvider {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self {
            strategies: Vec::new(),
            event_callback: Arc::new(NoOpEventCallback),
        }
    }

    /// Appends a strategy to the end of the chain.
    pub fn with_strategy(
        mut self,
        name: impl Into<String>,
        provider: Arc<dyn AIProvider>,
        timeout: Duration,
    ) -> Self {
        self.strategies
            .push(CompletionStrategy::new(name, provider, timeout));
        self
    }

    /// Sets the event callback for receiving chain events.
    pub fn with_event_callback(mut self, callback: Arc<dyn AIEventCallback>) -> Self {
        self.event_callback = callback;
        self
    }

    /// Strategies in the order they are tried.
    pub fn strategies(&self) -> &[CompletionStrategy] {
        &self.strategies
    }
}

#[async_trait]
impl AIProvider for FallbackChainProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        let request_id = if request.metadata.trace_id.is_empty() {
            uuid::Uuid::new_v4().to_string()
        } else {
            request.metadata.trace_id.clone()
        };
        let mut last_error = String::from("no completion strategies configured");

        for (index, strategy) in self.strategies.iter().enumerate() {
            debug!(strategy = %strategy.name, request_id = %request_id, "Trying completion strategy");

            match strategy.attempt(request.clone()).await {
                Ok(response) => {
                    self.event_callback.on_completion(events::CompletionServed::new(
                        &strategy.name,
                        &response.model,
                        response.usage,
                        &request_id,
                    ));
                    return Ok(response);
                }
                Err(err) => {
                    last_error = err.to_string();
                    if let Some(next) = self.strategies.get(index + 1) {
                        warn!(
                            strategy = %strategy.name,
                            next = %next.name,
                            error = %err,
                            "Completion strategy failed, falling back"
                        );
                        self.event_callback.on_fallback(events::StrategyFallback::new(
                            &strategy.name,
                            &next.name,
                            &last_error,
                            &request_id,
                        ));
                    } else {
                        warn!(strategy = %strategy.name, error = %err, "Last completion strategy failed");
                    }
                }
            }
        }

        Err(AIError::ExhaustedStrategies {
            attempted: self.strategies.len(),
            last_error,
        })
    }

    fn provider_info(&self) -> ProviderInfo {
        self.strategies
            .first()
            .map(|s| s.provider.provider_info())
            .unwrap_or_else(|| ProviderInfo::new("fallback-chain", "none"))
    }
}

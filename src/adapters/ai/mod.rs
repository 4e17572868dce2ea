//! AI Provider Adapters.
//!
//! Implementations of the AIProvider port.
//!
//! ## Available Adapters
//!
//! - `OllamaProvider` - Local Ollama server over HTTP (streaming generate)
//! - `OfflineTemplateProvider` - Canned templates, never fails
//! - `FallbackChainProvider` - Ordered strategies with per-strategy timeouts
//! - `MockAIProvider` - Configurable mock for testing

mod fallback_chain;
mod mock_provider;
mod offline_provider;
mod ollama_provider;

pub use fallback_chain::{
    events as ai_events, AIEventCallback, CompletionStrategy, FallbackChainProvider,
    NoOpEventCallback,
};
pub use mock_provider::{MockAIProvider, MockError, MockResponse};
pub use offline_provider::{OfflineTemplateProvider, OFFLINE_MODEL};
pub use ollama_provider::{OllamaConfig, OllamaProvider};

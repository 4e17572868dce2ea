//! Ollama Provider - Implementation of AIProvider for a local Ollama server.
//!
//! # Configuration
//!
//! ```ignore
//! let config = OllamaConfig::new("llama2:7b-chat")
//!     .with_base_url("http://localhost:11434")
//!     .with_timeout(Duration::from_secs(120));
//!
//! let provider = OllamaProvider::new(config)?;
//! ```
//!
//! # Protocol
//!
//! Each call first checks `GET /api/tags` with a short timeout. Generation uses
//! `POST /api/generate` with `stream: true`; the body is newline-delimited
//! JSON whose `response` fields are concatenated until a line reports `done`.

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, ProviderInfo, TokenUsage,
};

/// Marker Ollama puts in the error body when a model cannot be loaded.
const OUT_OF_MEMORY_MARKER: &str = "requires more system memory";

/// Configuration for the Ollama provider.
#[derive(Debug, Clone, PartialEq)]
pub struct OllamaConfig {
    /// Model to run (e.g., "llama2:7b-chat").
    pub model: String,
    /// Server base URL (default: http://localhost:11434).
    pub base_url: String,
    /// Timeout for the whole generation request.
    pub timeout: Duration,
    /// Timeout for the availability check.
    pub availability_timeout: Duration,
    /// Default `num_predict` when the request has none.
    pub max_tokens: u32,
    /// Default temperature when the request has none.
    pub temperature: f32,
}

impl OllamaConfig {
    /// Creates a configuration for the given model with default settings.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            base_url: "http://localhost:11434".to_string(),
            timeout: Duration::from_secs(120),
            availability_timeout: Duration::from_secs(5),
            max_tokens: 1000,
            temperature: 0.7,
        }
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Sets the generation timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the availability check timeout.
    pub fn with_availability_timeout(mut self, timeout: Duration) -> Self {
        self.availability_timeout = timeout;
        self
    }

    /// Sets default sampling options.
    pub fn with_sampling(mut self, max_tokens: u32, temperature: f32) -> Self {
        self.max_tokens = max_tokens;
        self.temperature = temperature;
        self
    }
}

/// Ollama API provider implementation.
pub struct OllamaProvider {
    config: OllamaConfig,
    client: Client,
}

impl OllamaProvider {
    /// Creates a new provider.
    ///
    /// # Errors
    ///
    /// `InvalidRequest` if the HTTP client cannot be built.
    pub fn new(config: OllamaConfig) -> Result<Self, AIError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AIError::InvalidRequest(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn tags_url(&self) -> String {
        format!("{}/api/tags", self.config.base_url)
    }

    fn generate_url(&self) -> String {
        format!("{}/api/generate", self.config.base_url)
    }

    /// Returns true if the server answers the tags request with 200.
    pub async fn is_available(&self) -> bool {
        match self
            .client
            .get(self.tags_url())
            .timeout(self.config.availability_timeout)
            .send()
            .await
        {
            Ok(response) => response.status() == StatusCode::OK,
            Err(e) => {
                debug!(error = %e, base_url = %self.config.base_url, "Ollama availability check failed");
                false
            }
        }
    }

    fn to_ollama_request(&self, request: &CompletionRequest) -> OllamaRequest {
        OllamaRequest {
            model: self.config.model.clone(),
            prompt: request.prompt.clone(),
            stream: true,
            options: OllamaOptions {
                temperature: request.temperature.unwrap_or(self.config.temperature),
                num_predict: request.max_tokens.unwrap_or(self.config.max_tokens),
            },
        }
    }

    async fn send_request(&self, request: &CompletionRequest) -> Result<Response, AIError> {
        self.client
            .post(self.generate_url())
            .json(&self.to_ollama_request(request))
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))
    }

    fn map_transport_error(&self, e: reqwest::Error) -> AIError {
        if e.is_timeout() {
            AIError::Timeout {
                timeout_secs: self.config.timeout.as_secs(),
            }
        } else if e.is_connect() {
            AIError::network(format!("Connection failed: {}", e))
        } else {
            AIError::network(e.to_string())
        }
    }

    async fn handle_response_status(&self, response: Response) -> Result<Response, AIError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();
        Err(error_for_status(status.as_u16(), &error_body, &self.config.model))
    }

    async fn read_stream(&self, response: Response) -> Result<NdjsonAccumulator, AIError> {
        let mut accumulator = NdjsonAccumulator::default();
        let mut bytes = response.bytes_stream();

        while let Some(chunk) = bytes.next().await {
            let chunk = chunk.map_err(|e| self.map_transport_error(e))?;
            if accumulator.push(&chunk) {
                return Ok(accumulator);
            }
        }

        accumulator.finish();
        Ok(accumulator)
    }
}

/// Maps a non-success status to the error the fallback chain understands.
fn error_for_status(status: u16, body: &str, model: &str) -> AIError {
    match status {
        500 if body.contains(OUT_OF_MEMORY_MARKER) => AIError::model_too_large(model),
        500..=599 => AIError::unavailable(format!("Server error {}: {}", status, body)),
        400..=499 => AIError::InvalidRequest(format!("Status {}: {}", status, body)),
        _ => AIError::network(format!("Unexpected status {}: {}", status, body)),
    }
}

#[async_trait]
impl AIProvider for OllamaProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        if !self.is_available().await {
            return Err(AIError::unavailable(format!(
                "Ollama is not reachable at {}",
                self.config.base_url
            )));
        }

        debug!(model = %self.config.model, "Sending generate request to Ollama");
        let response = self.send_request(&request).await?;
        let response = self.handle_response_status(response).await?;
        let accumulated = self.read_stream(response).await?;

        Ok(
            CompletionResponse::new(accumulated.output.trim(), self.config.model.clone())
                .with_usage(accumulated.usage),
        )
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("ollama", &self.config.model)
    }
}

/// Incremental reader of Ollama's NDJSON generate stream.
///
/// Lines may be split across network chunks, so bytes are buffered until a
/// newline arrives. Lines that are not valid JSON are skipped.
#[derive(Debug, Default)]
struct NdjsonAccumulator {
    buffer: Vec<u8>,
    output: String,
    usage: TokenUsage,
    done: bool,
}

impl NdjsonAccumulator {
    /// Feeds raw bytes. Returns true once a `done` line has been read.
    fn push(&mut self, bytes: &[u8]) -> bool {
        self.buffer.extend_from_slice(bytes);

        while let Some(pos) = self.buffer.iter().position(|b| *b == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=pos).collect();
            self.consume_line(&line);
            if self.done {
                return true;
            }
        }
        false
    }

    /// Consumes a trailing line without a newline.
    fn finish(&mut self) {
        if !self.done && !self.buffer.is_empty() {
            let line = std::mem::take(&mut self.buffer);
            self.consume_line(&line);
        }
    }

    fn consume_line(&mut self, line: &[u8]) {
        let text = String::from_utf8_lossy(line);
        let text = text.trim();
        if text.is_empty() {
            return;
        }

        let Ok(chunk) = serde_json::from_str::<GenerateChunk>(text) else {
            return;
        };

        if let Some(response) = chunk.response {
            self.output.push_str(&response);
        }
        if chunk.done {
            self.done = true;
            self.usage = TokenUsage::new(
                chunk.prompt_eval_count.unwrap_or(0),
                chunk.eval_count.unwrap_or(0),
            );
        }
    }
}

// ----- Ollama API Types -----

#[derive(Debug, Serialize)]
struct OllamaRequest {
    model: String,
    prompt: String,
    stream: bool,
    options: OllamaOptions,
}

#[derive(Debug, Serialize)]
struct OllamaOptions {
    temperature: f32,
    num_predict: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateChunk {
    response: Option<String>,
    #[serde(default)]
    done: bool,
    prompt_eval_count: Option<u32>,
    eval_count: Option<u32>,
}

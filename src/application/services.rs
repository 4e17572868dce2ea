//! Service wiring - builds every handler from configuration.
//!
//! One `EcritoireServices` is built at process start and shared. Handlers are
//! behind `Arc`, so cloning the bundle is cheap.

use std::sync::Arc;

use tracing::info;

use crate::adapters::ai::{FallbackChainProvider, OfflineTemplateProvider, OllamaConfig, OllamaProvider};
use crate::adapters::{
    FsProfileRepository, InMemoryContentRepository, InMemoryFeedbackRepository,
    InMemoryProfileRepository, InMemorySampleRepository,
};
use crate::config::{AiConfig, AnalysisConfig, AppConfig, StorageConfig};
use crate::ports::{
    AIError, AIProvider, FeedbackRepository, GeneratedContentRepository, StyleProfileRepository,
    WritingSampleRepository,
};

use super::generator::{GeneratorSettings, StyleConditionedGenerator};
use super::handlers::{
    AnalyzeSamplesHandler, DeleteSampleHandler, GenerateContentHandler,
    GetGenerationHistoryHandler, GetGenerationStatsHandler, GetStyleProfileHandler,
    ListSamplesHandler, SubmitFeedbackHandler, UploadSampleHandler,
};

/// Timeout for the offline template step; it never blocks.
const OFFLINE_TIMEOUT_SECS: u64 = 1;

/// Builds the completion chain: each configured model, then the offline templates.
///
/// # Errors
///
/// `InvalidRequest` if an HTTP client cannot be built.
pub fn completion_chain(config: &AiConfig) -> Result<FallbackChainProvider, AIError> {
    let mut chain = FallbackChainProvider::new();

    for (index, model) in config.models().into_iter().enumerate() {
        let provider = OllamaProvider::new(
            OllamaConfig::new(model)
                .with_base_url(&config.base_url)
                .with_timeout(config.timeout())
                .with_availability_timeout(config.availability_timeout())
                .with_sampling(config.max_tokens, config.temperature),
        )?;
        let name = if index == 0 { "primary" } else { "fallback" };
        chain = chain.with_strategy(name, Arc::new(provider), config.timeout());
    }

    if config.offline_fallback {
        chain = chain.with_strategy(
            "offline",
            Arc::new(OfflineTemplateProvider::new()),
            std::time::Duration::from_secs(OFFLINE_TIMEOUT_SECS),
        );
    }

    Ok(chain)
}

/// Profile repository selected by the storage section.
pub fn profile_repository(config: &StorageConfig) -> Arc<dyn StyleProfileRepository> {
    match &config.profile_dir {
        Some(dir) => Arc::new(FsProfileRepository::new(dir)),
        None => Arc::new(InMemoryProfileRepository::new()),
    }
}

/// The repositories every handler is built from.
#[derive(Clone)]
pub struct Repositories {
    pub samples: Arc<dyn WritingSampleRepository>,
    pub profiles: Arc<dyn StyleProfileRepository>,
    pub contents: Arc<dyn GeneratedContentRepository>,
    pub feedback: Arc<dyn FeedbackRepository>,
}

impl Repositories {
    /// Everything in memory.
    pub fn in_memory() -> Self {
        Self {
            samples: Arc::new(InMemorySampleRepository::new()),
            profiles: Arc::new(InMemoryProfileRepository::new()),
            contents: Arc::new(InMemoryContentRepository::new()),
            feedback: Arc::new(InMemoryFeedbackRepository::new()),
        }
    }

    /// In-memory records with profiles stored where the storage section says.
    pub fn from_config(config: &StorageConfig) -> Self {
        Self {
            profiles: profile_repository(config),
            ..Self::in_memory()
        }
    }
}

/// Every application handler, ready to use.
#[derive(Clone)]
pub struct EcritoireServices {
    pub upload_sample: Arc<UploadSampleHandler>,
    pub list_samples: Arc<ListSamplesHandler>,
    pub delete_sample: Arc<DeleteSampleHandler>,
    pub analyze_samples: Arc<AnalyzeSamplesHandler>,
    pub get_style_profile: Arc<GetStyleProfileHandler>,
    pub generate_content: Arc<GenerateContentHandler>,
    pub submit_feedback: Arc<SubmitFeedbackHandler>,
    pub generation_history: Arc<GetGenerationHistoryHandler>,
    pub generation_stats: Arc<GetGenerationStatsHandler>,
}

impl EcritoireServices {
    /// Wires handlers around the given repositories and completion provider.
    pub fn new(
        repos: Repositories,
        provider: Arc<dyn AIProvider>,
        settings: GeneratorSettings,
        limits: &AnalysisConfig,
    ) -> Self {
        let generator = Arc::new(StyleConditionedGenerator::new(provider).with_settings(settings));

        Self {
            upload_sample: Arc::new(
                UploadSampleHandler::new(repos.samples.clone())
                    .with_min_chars(limits.min_sample_chars),
            ),
            list_samples: Arc::new(ListSamplesHandler::new(repos.samples.clone())),
            delete_sample: Arc::new(DeleteSampleHandler::new(repos.samples.clone())),
            analyze_samples: Arc::new(AnalyzeSamplesHandler::new(
                repos.samples.clone(),
                repos.profiles.clone(),
            )),
            get_style_profile: Arc::new(GetStyleProfileHandler::new(repos.profiles.clone())),
            generate_content: Arc::new(
                GenerateContentHandler::new(
                    generator,
                    repos.profiles.clone(),
                    repos.contents.clone(),
                )
                .with_min_prompt_chars(limits.min_prompt_chars),
            ),
            submit_feedback: Arc::new(SubmitFeedbackHandler::new(
                repos.contents.clone(),
                repos.profiles.clone(),
                repos.feedback.clone(),
            )),
            generation_history: Arc::new(
                GetGenerationHistoryHandler::new(repos.contents.clone())
                    .with_default_limit(limits.history_limit),
            ),
            generation_stats: Arc::new(GetGenerationStatsHandler::new(repos.contents)),
        }
    }

    /// Wires the production stack: Ollama chain plus configured storage.
    ///
    /// # Errors
    ///
    /// Fails if the completion chain cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, AIError> {
        Self::with_repositories(config, Repositories::from_config(&config.storage))
    }

    /// Wires the configured completion chain around caller-supplied repositories.
    ///
    /// # Errors
    ///
    /// Fails if the completion chain cannot be built.
    pub fn with_repositories(config: &AppConfig, repos: Repositories) -> Result<Self, AIError> {
        let chain = completion_chain(&config.ai)?;
        info!(
            strategies = chain.strategies().len(),
            base_url = %config.ai.base_url,
            persistent_profiles = config.storage.is_persistent(),
            "Completion chain ready"
        );

        let settings = GeneratorSettings {
            max_tokens: config.ai.max_tokens,
            temperature: config.ai.temperature,
        };

        Ok(Self::new(repos, Arc::new(chain), settings, &config.analysis))
    }
}

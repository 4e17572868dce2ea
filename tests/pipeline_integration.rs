//! Integration tests for the sample → profile → generation → feedback pipeline.
//!
//! These tests drive the application handlers end to end through the
//! in-memory adapters:
//! 1. Samples are uploaded and analyzed into a profile
//! 2. Generation is conditioned on the profile and refined toward it
//! 3. Edits to generated text produce adjustment signals and stats
//! 4. The completion chain degrades to offline templates

use std::sync::Arc;
use std::time::Duration;

use ecritoire::adapters::ai::{
    FallbackChainProvider, MockAIProvider, MockError, OfflineTemplateProvider,
};
use ecritoire::application::{
    AnalyzeSamplesCommand, DeleteSampleCommand, EcritoireServices, GenerateContentCommand,
    GeneratorSettings, GetGenerationHistoryQuery, GetGenerationStatsQuery, GetStyleProfileQuery,
    ListSamplesQuery, Repositories, SubmitFeedbackCommand, UploadSampleCommand,
};
use ecritoire::config::{AnalysisConfig, AppConfig, StorageConfig};
use ecritoire::domain::content::FeedbackType;
use ecritoire::domain::foundation::{ErrorCode, UserId};
use ecritoire::domain::generation::{AdjustmentSignal, ContextCategory};
use ecritoire::domain::style::FormalityPreference;
use ecritoire::ports::AIProvider;
use tempfile::TempDir;

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Short, plain sentences so the profile targets short sentences.
const TERSE_SAMPLE: &str = "I walk. I run fast. We sit here. It is fine. We eat lunch. I nap now.";
const TERSE_SAMPLE_2: &str = "The dog barks. We go out. The sun is up. I read a bit. We cook rice.";

/// 28 words with a conjunction late enough to split on.
const LONG_SENTENCE: &str = "We walked along the quiet river path in the early morning light \
and we talked about the old house by the hill where we grew up long ago.";

const HAPPY_SAMPLE: &str =
    "I am very happy today! The sun is bright and I feel excited about life.";

fn writer() -> UserId {
    UserId::new("writer-1").unwrap()
}

fn other_writer() -> UserId {
    UserId::new("writer-2").unwrap()
}

fn services_with(provider: Arc<dyn AIProvider>, repos: Repositories) -> EcritoireServices {
    EcritoireServices::new(
        repos,
        provider,
        GeneratorSettings::default(),
        &AnalysisConfig::default(),
    )
}

fn in_memory_services(provider: Arc<dyn AIProvider>) -> EcritoireServices {
    services_with(provider, Repositories::in_memory())
}

async fn upload(services: &EcritoireServices, user_id: UserId, title: &str, content: &str) {
    services
        .upload_sample
        .handle(UploadSampleCommand {
            user_id,
            title: title.to_string(),
            content: content.to_string(),
        })
        .await
        .unwrap();
}

async fn analyze_terse_profile(services: &EcritoireServices) {
    upload(services, writer(), "Morning", TERSE_SAMPLE).await;
    upload(services, writer(), "Evening", TERSE_SAMPLE_2).await;
    services
        .analyze_samples
        .handle(AnalyzeSamplesCommand { user_id: writer() })
        .await
        .unwrap();
}

fn generate_cmd(prompt: &str) -> GenerateContentCommand {
    GenerateContentCommand {
        user_id: writer(),
        prompt: prompt.to_string(),
        context: ContextCategory::General,
    }
}

// =============================================================================
// Analysis
// =============================================================================

#[tokio::test]
async fn happy_sample_builds_single_sample_profile_with_joy() {
    let services = in_memory_services(Arc::new(MockAIProvider::new()));
    upload(&services, writer(), "A good day", HAPPY_SAMPLE).await;

    let summary = services
        .analyze_samples
        .handle(AnalyzeSamplesCommand { user_id: writer() })
        .await
        .unwrap();

    assert_eq!(summary.sample_count, 1);
    assert!(summary.emotional_categories >= 1);

    let record = services
        .get_style_profile
        .handle(GetStyleProfileQuery { user_id: writer() })
        .await
        .unwrap();
    assert_eq!(record.profile.sample_count, 1);
    assert!(!record.profile.emotional_expression_patterns["joy"].is_empty());
    assert!(record.profile.punctuation_style.exclamation_marks > 0.0);
    assert_eq!(record.profile.style_embedding.to_vector().len(), 32);
}

#[tokio::test]
async fn analysis_without_samples_fails_and_writes_nothing() {
    let services = in_memory_services(Arc::new(MockAIProvider::new()));

    let err = services
        .analyze_samples
        .handle(AnalyzeSamplesCommand { user_id: writer() })
        .await
        .unwrap_err();
    assert!(err.code.is_validation());

    let err = services
        .get_style_profile
        .handle(GetStyleProfileQuery { user_id: writer() })
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::StyleProfileNotFound);
}

#[tokio::test]
async fn reanalysis_replaces_profile_and_marks_samples() {
    let services = in_memory_services(Arc::new(MockAIProvider::new()));
    upload(&services, writer(), "Morning", TERSE_SAMPLE).await;
    services
        .analyze_samples
        .handle(AnalyzeSamplesCommand { user_id: writer() })
        .await
        .unwrap();

    upload(&services, writer(), "A good day", HAPPY_SAMPLE).await;
    let summary = services
        .analyze_samples
        .handle(AnalyzeSamplesCommand { user_id: writer() })
        .await
        .unwrap();

    assert_eq!(summary.sample_count, 2);
    assert_eq!(summary.version, 2);

    let samples = services
        .list_samples
        .handle(ListSamplesQuery { user_id: writer() })
        .await
        .unwrap();
    assert_eq!(samples.len(), 2);
    assert!(samples.iter().all(|s| s.is_analyzed()));
}

#[tokio::test]
async fn only_owner_can_delete_sample() {
    let services = in_memory_services(Arc::new(MockAIProvider::new()));
    upload(&services, writer(), "Morning", TERSE_SAMPLE).await;
    let sample_id = *services
        .list_samples
        .handle(ListSamplesQuery { user_id: writer() })
        .await
        .unwrap()[0]
        .id();

    let err = services
        .delete_sample
        .handle(DeleteSampleCommand {
            user_id: other_writer(),
            sample_id,
        })
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::Forbidden);

    services
        .delete_sample
        .handle(DeleteSampleCommand {
            user_id: writer(),
            sample_id,
        })
        .await
        .unwrap();
    let remaining = services
        .list_samples
        .handle(ListSamplesQuery { user_id: writer() })
        .await
        .unwrap();
    assert!(remaining.is_empty());
}

// =============================================================================
// Generation and feedback
// =============================================================================

#[tokio::test]
async fn full_pipeline_refines_records_and_learns_from_edits() {
    let provider = Arc::new(
        MockAIProvider::new()
            .with_response(LONG_SENTENCE)
            .with_response("A second draft."),
    );
    let services = in_memory_services(provider.clone());
    analyze_terse_profile(&services).await;

    // Short-sentence profile splits the long completion
    let content = services
        .generate_content
        .handle(generate_cmd("Describe a walk by the river"))
        .await
        .unwrap();
    let text = content.generated_text();
    assert!(text.matches(". ").count() >= 1, "expected a split: {}", text);
    assert!(!text.contains(" and we talked"));

    let calls = provider.get_calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].prompt.contains("Describe a walk by the river"));

    // Longer, more formal edit
    let modified = "We walked along the quiet river path in the early morning light. \
        Furthermore, we talked at length about the old house by the hill where we grew up. \
        However, the house has long since been sold, and the hill is now covered with new homes.";
    let result = services
        .submit_feedback
        .handle(SubmitFeedbackCommand {
            user_id: writer(),
            content_id: *content.id(),
            feedback_type: FeedbackType::Modified,
            modified_content: Some(modified.to_string()),
        })
        .await
        .unwrap();

    let analysis = result.analysis.expect("modified feedback with a profile is analyzed");
    assert!(analysis.has(AdjustmentSignal::PrefersLongerContent));
    assert!(analysis.has(AdjustmentSignal::IncreaseFormality));
    assert!(!analysis.has(AdjustmentSignal::PrefersShorterContent));

    // A second generation, rejected
    let second = services
        .generate_content
        .handle(generate_cmd("Write a second draft"))
        .await
        .unwrap();
    services
        .submit_feedback
        .handle(SubmitFeedbackCommand {
            user_id: writer(),
            content_id: *second.id(),
            feedback_type: FeedbackType::Rejected,
            modified_content: None,
        })
        .await
        .unwrap();

    let history = services
        .generation_history
        .handle(GetGenerationHistoryQuery {
            user_id: writer(),
            limit: None,
        })
        .await
        .unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].content_id, *second.id());
    assert_eq!(history[0].feedback, Some(FeedbackType::Rejected));
    assert!(!history[0].has_modifications);
    assert_eq!(history[1].feedback, Some(FeedbackType::Modified));
    assert!(history[1].has_modifications);

    let stats = services
        .generation_stats
        .handle(GetGenerationStatsQuery { user_id: writer() })
        .await
        .unwrap();
    assert_eq!(stats.total_generations, 2);
    assert_eq!(stats.modified, 1);
    assert_eq!(stats.rejected, 1);
    assert_eq!(stats.accepted, 0);
    assert!((stats.modification_rate - 50.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn generation_requires_a_profile() {
    let provider = Arc::new(MockAIProvider::new());
    let services = in_memory_services(provider.clone());

    let err = services
        .generate_content
        .handle(generate_cmd("Write a short note"))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::StyleProfileNotFound);
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn feedback_on_someone_elses_content_is_forbidden() {
    let services = in_memory_services(Arc::new(MockAIProvider::new().with_response("Hello there.")));
    analyze_terse_profile(&services).await;
    let content = services
        .generate_content
        .handle(generate_cmd("Write a greeting"))
        .await
        .unwrap();

    let err = services
        .submit_feedback
        .handle(SubmitFeedbackCommand {
            user_id: other_writer(),
            content_id: *content.id(),
            feedback_type: FeedbackType::Accepted,
            modified_content: None,
        })
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::Forbidden);
}

// =============================================================================
// Completion chain
// =============================================================================

#[tokio::test]
async fn offline_template_answers_when_models_are_down() {
    let chain = FallbackChainProvider::new()
        .with_strategy(
            "primary",
            Arc::new(MockAIProvider::new().with_error(MockError::ModelTooLarge {
                model: "llama2:7b-chat".to_string(),
            })),
            Duration::from_secs(1),
        )
        .with_strategy(
            "fallback",
            Arc::new(MockAIProvider::new().with_error(MockError::Unavailable {
                message: "connection refused".to_string(),
            })),
            Duration::from_secs(1),
        )
        .with_strategy(
            "offline",
            Arc::new(OfflineTemplateProvider::new()),
            Duration::from_secs(1),
        );
    let services = in_memory_services(Arc::new(chain));
    analyze_terse_profile(&services).await;

    let content = services
        .generate_content
        .handle(generate_cmd("Write an email to my landlord about the heating"))
        .await
        .unwrap();

    assert!(content.generated_text().to_lowercase().contains("dear [recipient]"));
}

#[tokio::test]
async fn exhausted_chain_reports_generation_unavailable() {
    let chain = FallbackChainProvider::new().with_strategy(
        "primary",
        Arc::new(MockAIProvider::new().with_error(MockError::Network {
            message: "reset by peer".to_string(),
        })),
        Duration::from_secs(1),
    );
    let services = in_memory_services(Arc::new(chain));
    analyze_terse_profile(&services).await;

    let err = services
        .generate_content
        .handle(generate_cmd("Write a short note"))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::GenerationUnavailable);

    let history = services
        .generation_history
        .handle(GetGenerationHistoryQuery {
            user_id: writer(),
            limit: None,
        })
        .await
        .unwrap();
    assert!(history.is_empty());
}

// =============================================================================
// Storage
// =============================================================================

#[tokio::test]
async fn filesystem_profiles_survive_a_restart() {
    let temp_dir = TempDir::new().unwrap();
    let config = AppConfig {
        storage: StorageConfig {
            profile_dir: Some(temp_dir.path().to_path_buf()),
        },
        ..Default::default()
    };

    let first = services_with(
        Arc::new(MockAIProvider::new()),
        Repositories::from_config(&config.storage),
    );
    upload(&first, writer(), "A good day", HAPPY_SAMPLE).await;
    first
        .analyze_samples
        .handle(AnalyzeSamplesCommand { user_id: writer() })
        .await
        .unwrap();

    let second = services_with(
        Arc::new(MockAIProvider::new()),
        Repositories::from_config(&config.storage),
    );
    let record = second
        .get_style_profile
        .handle(GetStyleProfileQuery { user_id: writer() })
        .await
        .unwrap();

    assert_eq!(record.profile.sample_count, 1);
    assert_eq!(record.profile.formality_preference, FormalityPreference::Neutral);
}

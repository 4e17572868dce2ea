//! CLI command definitions and handlers

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use ecritoire::adapters::InMemoryProfileRepository;
use ecritoire::application::{
    AnalyzeSamplesCommand, EcritoireServices, GenerateContentCommand, GetStyleProfileQuery,
    Repositories, UploadSampleCommand,
};
use ecritoire::config::AppConfig;
use ecritoire::domain::foundation::UserId;
use ecritoire::domain::generation::{ContextCategory, FeedbackAnalyzer};
use ecritoire::domain::style::{StyleProfile, StyleProfileRecord};
use ecritoire::ports::StyleProfileRepository;

/// Écritoire - learn a writing style, then write like it
#[derive(Parser, Debug)]
#[command(name = "ecritoire", version)]
#[command(after_help = "\
Examples:
  ecritoire analyze notes/*.txt > profile.json      Build a profile from samples
  ecritoire generate --profile profile.json \"Write an email to my landlord\"
  ecritoire feedback \"Original text.\" \"My edited text.\"")]
pub struct Cli {
    /// User the samples and profile belong to
    #[arg(long, global = true, default_value = "local", env = "ECRITOIRE_USER")]
    pub user: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze sample files and print the style profile as JSON
    Analyze {
        /// Text files, one writing sample each
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Generate text in the style of a profile
    Generate {
        /// Profile JSON written by `analyze`; defaults to the stored profile
        #[arg(long, short = 'p')]
        profile: Option<PathBuf>,

        /// Kind of writing (general, personal, emotional, creative, ...)
        #[arg(long, short = 'c', default_value = "general")]
        context: String,

        /// What to write
        prompt: String,
    },

    /// Compare a generation with an edited version and print adjustment signals
    Feedback {
        /// Generated text
        generated: String,

        /// The user's edited version
        modified: String,

        /// Prompt the text was generated from
        #[arg(long, default_value = "")]
        prompt: String,
    },
}

/// Runs a parsed command.
pub async fn run(cli: Cli, config: &AppConfig) -> Result<()> {
    let user_id = UserId::new(cli.user)?;

    match cli.command {
        Commands::Analyze { files } => analyze(config, user_id, &files).await,
        Commands::Generate {
            profile,
            context,
            prompt,
        } => generate(config, user_id, profile.as_deref(), &context, prompt).await,
        Commands::Feedback {
            generated,
            modified,
            prompt,
        } => {
            let analysis = FeedbackAnalyzer::analyze(&prompt, &generated, &modified);
            println!("{}", serde_json::to_string_pretty(&analysis)?);
            Ok(())
        }
    }
}

async fn analyze(config: &AppConfig, user_id: UserId, files: &[PathBuf]) -> Result<()> {
    let services = EcritoireServices::from_config(config)?;

    for path in files {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let title = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let sample = services
            .upload_sample
            .handle(UploadSampleCommand {
                user_id: user_id.clone(),
                title,
                content,
            })
            .await
            .with_context(|| format!("Rejected sample {}", path.display()))?;
        debug!(sample_id = %sample.id(), path = %path.display(), "Loaded sample");
    }

    let summary = services
        .analyze_samples
        .handle(AnalyzeSamplesCommand {
            user_id: user_id.clone(),
        })
        .await?;
    eprintln!(
        "Analyzed {} samples: {} vocabulary, {} formality, {} words per sentence",
        summary.sample_count,
        summary.vocabulary_level,
        summary.formality_preference,
        summary.avg_sentence_length
    );

    let record = services
        .get_style_profile
        .handle(GetStyleProfileQuery { user_id })
        .await?;
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

async fn generate(
    config: &AppConfig,
    user_id: UserId,
    profile_path: Option<&Path>,
    context: &str,
    prompt: String,
) -> Result<()> {
    let profile = match profile_path {
        Some(path) => Some(read_profile(path).await?),
        None => None,
    };
    let repos = generation_repositories(config, &user_id, profile).await?;
    let services = EcritoireServices::with_repositories(config, repos)?;

    let content = services
        .generate_content
        .handle(GenerateContentCommand {
            user_id,
            prompt,
            context: ContextCategory::from(context),
        })
        .await?;

    println!("{}", content.generated_text());
    Ok(())
}

/// A profile given on the command line lives only for this run; the
/// configured store is only ever written by analysis.
async fn generation_repositories(
    config: &AppConfig,
    user_id: &UserId,
    profile: Option<StyleProfile>,
) -> Result<Repositories> {
    let repos = Repositories::from_config(&config.storage);

    match profile {
        Some(profile) => {
            let profiles: Arc<dyn StyleProfileRepository> =
                Arc::new(InMemoryProfileRepository::new());
            profiles
                .save(&StyleProfileRecord::new(user_id.clone(), profile))
                .await?;
            Ok(Repositories { profiles, ..repos })
        }
        None if config.storage.is_persistent() => Ok(repos),
        None => bail!("No profile given; pass --profile or set ECRITOIRE__STORAGE__PROFILE_DIR"),
    }
}

/// Accepts either a full record (as printed by `analyze`) or a bare profile.
async fn read_profile(path: &Path) -> Result<StyleProfile> {
    let json = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read profile {}", path.display()))?;

    if let Ok(record) = serde_json::from_str::<StyleProfileRecord>(&json) {
        return Ok(record.profile);
    }
    serde_json::from_str::<StyleProfile>(&json)
        .with_context(|| format!("{} is not a style profile", path.display()))
}

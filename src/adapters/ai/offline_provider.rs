//! Offline Template Provider - last step of the completion chain.
//!
//! Never fails. Picks a canned template from keywords in the prompt so the
//! user gets something to edit even with no model running.

use async_trait::async_trait;

use crate::domain::generation::offline_response;
use crate::ports::{AIError, AIProvider, CompletionRequest, CompletionResponse, ProviderInfo};

/// Model name reported for template responses.
pub const OFFLINE_MODEL: &str = "offline-template";

/// Provider serving fixed templates.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineTemplateProvider;

impl OfflineTemplateProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AIProvider for OfflineTemplateProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        Ok(CompletionResponse::new(
            offline_response(&request.prompt),
            OFFLINE_MODEL,
        ))
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("offline", OFFLINE_MODEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::generation::OfflineTemplate;

    #[tokio::test]
    async fn picks_template_from_prompt() {
        let provider = OfflineTemplateProvider::new();

        let response = provider
            .complete(CompletionRequest::new("Draft an email to my landlord"))
            .await
            .unwrap();

        assert_eq!(response.content, OfflineTemplate::Email.text());
        assert_eq!(response.model, OFFLINE_MODEL);
    }

    #[tokio::test]
    async fn unknown_prompt_gets_general_template() {
        let response = OfflineTemplateProvider::new()
            .complete(CompletionRequest::new("Tell me about the weather"))
            .await
            .unwrap();

        assert_eq!(response.content, OfflineTemplate::General.text());
    }
}

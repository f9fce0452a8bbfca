//! Text-completion service implementations.

pub mod gemini;
pub mod mock;

pub use gemini::GeminiCompletionService;
pub use mock::MockCompletionService;

use async_trait::async_trait;

use pl_core::services::chat::CompletionServiceTrait;
use pl_shared::config::AiConfig;

use crate::InfrastructureError;

/// Provider-selected completion service, chosen once at startup
pub enum AnyCompletionService {
    Gemini(GeminiCompletionService),
    Mock(MockCompletionService),
}

impl AnyCompletionService {
    /// Build the completion service named by `config.provider`
    pub fn from_config(config: &AiConfig) -> Result<Self, InfrastructureError> {
        match config.provider.as_str() {
            "gemini" => Ok(Self::Gemini(GeminiCompletionService::new(config)?)),
            "mock" => Ok(Self::Mock(MockCompletionService::new())),
            other => Err(InfrastructureError::Config(format!(
                "unknown AI provider: {}",
                other
            ))),
        }
    }
}

#[async_trait]
impl CompletionServiceTrait for AnyCompletionService {
    async fn generate(&self, prompt: &str) -> Result<String, String> {
        match self {
            Self::Gemini(service) => service.generate(prompt).await,
            Self::Mock(service) => service.generate(prompt).await,
        }
    }
}

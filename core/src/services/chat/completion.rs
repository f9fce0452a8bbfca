//! Trait for text-completion service integration

use async_trait::async_trait;

/// Trait for the external text-completion collaborator
#[async_trait]
pub trait CompletionServiceTrait: Send + Sync {
    /// Generate a completion for the given prompt.
    ///
    /// Returns the generated text, or an error message.
    async fn generate(&self, prompt: &str) -> Result<String, String>;
}

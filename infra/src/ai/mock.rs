//! Mock completion service implementation
//!
//! Returns a canned reply instead of calling the model. Used in development
//! and in the integration tests.

use async_trait::async_trait;
use tracing::{info, warn};

use pl_core::services::chat::CompletionServiceTrait;

/// Mock completion service for development and testing
#[derive(Clone)]
pub struct MockCompletionService {
    /// Reply returned for every prompt
    reply: String,
    /// Whether to simulate failures (for testing)
    simulate_failure: bool,
}

impl MockCompletionService {
    pub fn new() -> Self {
        Self {
            reply: "This is a mock reply.".to_string(),
            simulate_failure: false,
        }
    }

    /// Create a mock that answers every prompt with the given text
    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            simulate_failure: false,
        }
    }

    /// Create a mock that fails every request
    pub fn failing() -> Self {
        Self {
            reply: String::new(),
            simulate_failure: true,
        }
    }
}

impl Default for MockCompletionService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionServiceTrait for MockCompletionService {
    async fn generate(&self, prompt: &str) -> Result<String, String> {
        if self.simulate_failure {
            warn!("mock completion simulating model failure");
            return Err("simulated completion failure".to_string());
        }

        info!(prompt_len = prompt.len(), "mock completion generated");
        Ok(self.reply.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_returns_configured_reply() {
        let service = MockCompletionService::with_reply("hello there");

        assert_eq!(service.generate("hi").await.unwrap(), "hello there");
    }

    #[tokio::test]
    async fn test_failing_mock_errors() {
        let service = MockCompletionService::failing();

        assert!(service.generate("hi").await.is_err());
    }
}

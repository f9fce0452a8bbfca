//! Text-completion service configuration

use serde::{Deserialize, Serialize};

/// Completion service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AiConfig {
    /// Completion provider ("gemini" or "mock")
    pub provider: String,

    /// Provider API key
    pub api_key: String,

    /// Model identifier sent to the provider
    pub model: String,

    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            provider: String::from("mock"),
            api_key: String::new(),
            model: String::from("gemini-2.5-flash"),
            request_timeout_secs: 60,
        }
    }
}

impl AiConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let provider = std::env::var("AI_PROVIDER").unwrap_or_else(|_| "mock".to_string());
        let api_key = std::env::var("GEMINI_API_KEY").unwrap_or_default();
        let model =
            std::env::var("AI_MODEL").unwrap_or_else(|_| "gemini-2.5-flash".to_string());

        Self {
            provider,
            api_key,
            model,
            ..Default::default()
        }
    }
}

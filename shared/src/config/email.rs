//! Email delivery configuration

use serde::{Deserialize, Serialize};

/// Mailer configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    /// Mailer provider ("resend" or "mock")
    pub provider: String,

    /// Provider API key
    pub api_key: String,

    /// From address shown to recipients
    pub from_address: String,

    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            provider: String::from("mock"),
            api_key: String::new(),
            from_address: String::from("Parley <noreply@parley.dev>"),
            request_timeout_secs: 30,
        }
    }
}

impl EmailConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let provider = std::env::var("EMAIL_PROVIDER").unwrap_or_else(|_| "mock".to_string());
        let api_key = std::env::var("RESEND_API_KEY").unwrap_or_default();
        let from_address = std::env::var("EMAIL_FROM")
            .unwrap_or_else(|_| "Parley <noreply@parley.dev>".to_string());

        Self {
            provider,
            api_key,
            from_address,
            ..Default::default()
        }
    }
}

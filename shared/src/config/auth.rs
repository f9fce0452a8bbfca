//! Authentication configuration

use serde::{Deserialize, Serialize};

/// Authentication and token configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Secret key for signing bearer tokens
    pub jwt_secret: String,

    /// Bearer token lifetime in hours
    pub token_expiry_hours: i64,

    /// Verification token lifetime in hours
    pub verification_expiry_hours: i64,

    /// Minimum accepted password length
    pub min_password_length: usize,

    /// Public base URL used to build verification links
    pub base_url: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::from("change-me-in-production"),
            token_expiry_hours: 24,
            verification_expiry_hours: 24,
            min_password_length: 8,
            base_url: String::from("http://localhost:8080"),
        }
    }
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let jwt_secret = std::env::var("JWT_SECRET")
            .unwrap_or_else(|_| "change-me-in-production".to_string());
        let base_url = std::env::var("API_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string());

        Self {
            jwt_secret,
            base_url,
            ..Default::default()
        }
    }

    /// Check if the default secret is still in use (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.jwt_secret == "change-me-in-production"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lifetimes() {
        let config = AuthConfig::default();
        assert_eq!(config.token_expiry_hours, 24);
        assert_eq!(config.verification_expiry_hours, 24);
        assert_eq!(config.min_password_length, 8);
        assert!(config.is_using_default_secret());
    }
}

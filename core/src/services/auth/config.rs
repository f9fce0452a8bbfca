//! Configuration for the authentication service

use crate::domain::entities::verification_token::DEFAULT_EXPIRATION_HOURS;

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Minimum accepted password length
    pub min_password_length: usize,

    /// Verification token lifetime in hours
    pub verification_expiry_hours: i64,

    /// Public base URL used to build verification links
    pub base_url: String,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            min_password_length: 8,
            verification_expiry_hours: DEFAULT_EXPIRATION_HOURS,
            base_url: "http://localhost:8080".to_string(),
        }
    }
}

//! Configuration for the token service

use crate::domain::entities::token::BEARER_TOKEN_EXPIRY_HOURS;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// HS256 signing secret, loaded once at startup and never logged
    pub jwt_secret: String,
    /// Bearer token expiry in hours
    pub expiry_hours: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            expiry_hours: BEARER_TOKEN_EXPIRY_HOURS,
        }
    }
}

impl TokenServiceConfig {
    /// Creates a configuration with the given secret and default expiry
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            ..Default::default()
        }
    }
}

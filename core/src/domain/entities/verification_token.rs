//! Verification token entity for email-based account verification.

use chrono::{DateTime, Duration, Utc};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Number of random bytes in an opaque token
pub const TOKEN_BYTES: usize = 32;

/// Length of the hex-encoded token string
pub const TOKEN_LENGTH: usize = TOKEN_BYTES * 2;

/// Default expiration time for verification tokens (24 hours)
pub const DEFAULT_EXPIRATION_HOURS: i64 = 24;

/// Single-use opaque token proving control of an email address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationToken {
    /// Unique identifier for the verification token
    pub id: Uuid,

    /// User this token was issued to
    pub user_id: Uuid,

    /// The opaque token value, unique across all live tokens
    pub token: String,

    /// Timestamp when the token was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the token expires
    pub expires_at: DateTime<Utc>,
}

impl VerificationToken {
    /// Creates a new verification token with the default 24-hour expiry
    pub fn new(user_id: Uuid) -> Self {
        Self::new_with_expiration(user_id, DEFAULT_EXPIRATION_HOURS)
    }

    /// Creates a new verification token with a custom expiry in hours
    pub fn new_with_expiration(user_id: Uuid, expiration_hours: i64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            token: Self::generate_token(),
            created_at: now,
            expires_at: now + Duration::hours(expiration_hours),
        }
    }

    /// Generates a cryptographically secure random token, hex-encoded
    fn generate_token() -> String {
        let mut bytes = [0u8; TOKEN_BYTES];
        rand::thread_rng().fill_bytes(&mut bytes);
        hex::encode(bytes)
    }

    /// Checks if the token has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Gets the time remaining until expiration, or zero if expired
    pub fn time_until_expiration(&self) -> Duration {
        let now = Utc::now();
        if self.expires_at > now {
            self.expires_at - now
        } else {
            Duration::zero()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_new_token() {
        let user_id = Uuid::new_v4();
        let token = VerificationToken::new(user_id);

        assert_eq!(token.user_id, user_id);
        assert_eq!(token.token.len(), TOKEN_LENGTH);
        assert!(!token.is_expired());
        assert_eq!(
            token.expires_at,
            token.created_at + Duration::hours(DEFAULT_EXPIRATION_HOURS)
        );
    }

    #[test]
    fn test_token_format() {
        for _ in 0..50 {
            let token = VerificationToken::new(Uuid::new_v4());
            assert_eq!(token.token.len(), TOKEN_LENGTH);
            assert!(token.token.chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn test_token_uniqueness() {
        let tokens: HashSet<String> = (0..100)
            .map(|_| VerificationToken::new(Uuid::new_v4()).token)
            .collect();
        assert_eq!(tokens.len(), 100);
    }

    #[test]
    fn test_custom_expiration() {
        let token = VerificationToken::new_with_expiration(Uuid::new_v4(), 48);
        assert_eq!(token.expires_at, token.created_at + Duration::hours(48));
    }

    #[test]
    fn test_is_expired() {
        let mut token = VerificationToken::new(Uuid::new_v4());
        token.expires_at = Utc::now() - Duration::hours(1);

        assert!(token.is_expired());
        assert_eq!(token.time_until_expiration(), Duration::zero());
    }
}

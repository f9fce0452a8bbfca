//! Bearer token claims for stateless session credentials.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Bearer token expiration time (24 hours)
pub const BEARER_TOKEN_EXPIRY_HOURS: i64 = 24;

/// Claims structure for the signed bearer token payload.
///
/// The issuer claim carries the user id; nothing else in the payload is
/// trusted by the verifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Issuer (user ID)
    pub iss: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl Claims {
    /// Creates new claims for a bearer token expiring after the given hours
    pub fn new(user_id: Uuid, expiry_hours: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::hours(expiry_hours);

        Self {
            iss: user_id.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Gets the user ID from the issuer claim
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.iss)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_claims() {
        let user_id = Uuid::new_v4();
        let claims = Claims::new(user_id, BEARER_TOKEN_EXPIRY_HOURS);

        assert_eq!(claims.iss, user_id.to_string());
        assert_eq!(claims.exp - claims.iat, BEARER_TOKEN_EXPIRY_HOURS * 3600);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_user_id_parsing() {
        let user_id = Uuid::new_v4();
        let claims = Claims::new(user_id, 24);

        assert_eq!(claims.user_id().unwrap(), user_id);
    }

    #[test]
    fn test_user_id_parsing_rejects_garbage() {
        let mut claims = Claims::new(Uuid::new_v4(), 24);
        claims.iss = "not-a-uuid".to_string();

        assert!(claims.user_id().is_err());
    }

    #[test]
    fn test_expired_claims() {
        let mut claims = Claims::new(Uuid::new_v4(), 24);
        claims.exp = Utc::now().timestamp() - 1;

        assert!(claims.is_expired());
    }
}

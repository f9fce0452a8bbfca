//! User entity representing a registered account in the Parley system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity representing a registered account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Unique email address used to sign in
    pub email: String,

    /// Bcrypt hash of the user's password, never serialized
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Whether the user's email address has been verified
    pub is_verified: bool,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new, unverified user
    pub fn new(email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            is_verified: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Marks the user's email as verified
    pub fn verify(&mut self) {
        self.is_verified = true;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_is_unverified() {
        let user = User::new("a@b.com".to_string(), "$2b$12$hash".to_string());

        assert_eq!(user.email, "a@b.com");
        assert_eq!(user.password_hash, "$2b$12$hash");
        assert!(!user.is_verified);
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_verify_flips_flag() {
        let mut user = User::new("a@b.com".to_string(), "hash".to_string());

        assert!(!user.is_verified);
        user.verify();
        assert!(user.is_verified);
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let user = User::new("a@b.com".to_string(), "super-secret-hash".to_string());
        let json = serde_json::to_string(&user).unwrap();

        assert!(!json.contains("super-secret-hash"));
        assert!(json.contains("\"email\":\"a@b.com\""));
        assert!(json.contains("\"isVerified\":false"));
    }
}

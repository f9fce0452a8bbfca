//! Bcrypt-based password hashing and verification.

use crate::errors::PasswordError;

/// One-way adaptive password hashing with a configurable cost factor.
pub struct PasswordService {
    cost: u32,
}

impl PasswordService {
    /// Creates a service with an explicit bcrypt cost factor
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a plaintext password
    pub fn hash(&self, plaintext: &str) -> Result<String, PasswordError> {
        bcrypt::hash(plaintext, self.cost).map_err(|e| {
            tracing::error!("bcrypt hashing failed: {}", e);
            PasswordError::HashingFailed
        })
    }

    /// Verify a plaintext password against a stored hash.
    ///
    /// A mismatch returns `Ok(false)`; only a malformed stored hash is an
    /// error.
    pub fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, PasswordError> {
        bcrypt::verify(plaintext, hash).map_err(|_| PasswordError::InvalidHash)
    }
}

impl Default for PasswordService {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

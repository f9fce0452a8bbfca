//! Verification token repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::verification_token::VerificationToken;
use crate::errors::DomainError;

/// Repository trait for VerificationToken persistence operations
///
/// The token value column carries a unique constraint; token collision
/// under concurrent registration is resolved by the store rejecting the
/// second writer.
#[async_trait]
pub trait VerificationTokenRepository: Send + Sync {
    /// Persist a new verification token
    async fn create(
        &self,
        token: VerificationToken,
    ) -> Result<VerificationToken, DomainError>;

    /// Find a token by its opaque value
    async fn find_by_token(
        &self,
        token: &str,
    ) -> Result<Option<VerificationToken>, DomainError>;

    /// Consume a token: mark the owning user verified and delete the token.
    ///
    /// Both writes happen in a single transaction; a crash cannot leave the
    /// user verified with the token still redeemable, nor the token gone
    /// with the user unverified.
    async fn consume(&self, token: &VerificationToken) -> Result<(), DomainError>;

    /// Delete a token by id, used when expiry is detected
    ///
    /// # Returns
    /// * `Ok(true)` - Token was deleted
    /// * `Ok(false)` - Token no longer present
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}

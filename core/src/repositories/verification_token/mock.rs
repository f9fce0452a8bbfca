//! Mock implementation of VerificationTokenRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::domain::entities::verification_token::VerificationToken;
use crate::errors::DomainError;

use super::trait_::VerificationTokenRepository;

/// Mock verification token repository for testing.
///
/// Shares the user map with `MockUserRepository` so that `consume` can flip
/// the verified flag the way the real store does inside a transaction.
pub struct MockVerificationTokenRepository {
    tokens: Arc<RwLock<HashMap<Uuid, VerificationToken>>>,
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl MockVerificationTokenRepository {
    pub fn new(users: Arc<RwLock<HashMap<Uuid, User>>>) -> Self {
        Self {
            tokens: Arc::new(RwLock::new(HashMap::new())),
            users,
        }
    }

    /// Handle to the stored tokens, for test assertions
    pub fn tokens_handle(&self) -> Arc<RwLock<HashMap<Uuid, VerificationToken>>> {
        Arc::clone(&self.tokens)
    }
}

#[async_trait]
impl VerificationTokenRepository for MockVerificationTokenRepository {
    async fn create(
        &self,
        token: VerificationToken,
    ) -> Result<VerificationToken, DomainError> {
        let mut tokens = self.tokens.write().await;

        // Unique-token constraint, as the real store enforces it
        if tokens.values().any(|t| t.token == token.token) {
            return Err(DomainError::Database {
                message: "duplicate token value".to_string(),
            });
        }

        tokens.insert(token.id, token.clone());
        Ok(token)
    }

    async fn find_by_token(
        &self,
        token: &str,
    ) -> Result<Option<VerificationToken>, DomainError> {
        let tokens = self.tokens.read().await;
        Ok(tokens.values().find(|t| t.token == token).cloned())
    }

    async fn consume(&self, token: &VerificationToken) -> Result<(), DomainError> {
        let mut tokens = self.tokens.write().await;
        let mut users = self.users.write().await;

        let removed = tokens.remove(&token.id);
        if removed.is_none() {
            return Err(DomainError::NotFound {
                resource: "verification token".to_string(),
            });
        }

        match users.get_mut(&token.user_id) {
            Some(user) => user.verify(),
            None => {
                return Err(DomainError::NotFound {
                    resource: "user".to_string(),
                })
            }
        }

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut tokens = self.tokens.write().await;
        Ok(tokens.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::user::{MockUserRepository, UserRepository};

    #[tokio::test]
    async fn test_consume_verifies_user_and_deletes_token() {
        let user_repo = MockUserRepository::new();
        let token_repo = MockVerificationTokenRepository::new(user_repo.users_handle());

        let user = user_repo
            .create(User::new("a@b.com".to_string(), "hash".to_string()))
            .await
            .unwrap();
        let token = token_repo
            .create(VerificationToken::new(user.id))
            .await
            .unwrap();

        token_repo.consume(&token).await.unwrap();

        let stored = user_repo.find_by_id(user.id).await.unwrap().unwrap();
        assert!(stored.is_verified);
        assert_eq!(token_repo.find_by_token(&token.token).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let user_repo = MockUserRepository::new();
        let token_repo = MockVerificationTokenRepository::new(user_repo.users_handle());
        let token = token_repo
            .create(VerificationToken::new(Uuid::new_v4()))
            .await
            .unwrap();

        assert!(token_repo.delete(token.id).await.unwrap());
        assert!(!token_repo.delete(token.id).await.unwrap());
    }
}

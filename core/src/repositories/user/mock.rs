//! Mock implementation of UserRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError};

use super::trait_::UserRepository;

/// Mock user repository for testing
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Handle to the shared user map, for wiring up the mock verification
    /// token repository (which flips the verified flag on consume).
    pub fn users_handle(&self) -> Arc<RwLock<HashMap<Uuid, User>>> {
        Arc::clone(&self.users)
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().any(|u| u.email == email))
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        // Unique-email constraint, as the real store enforces it
        if users.values().any(|u| u.email == user.email) {
            return Err(DomainError::Auth(AuthError::EmailAlreadyRegistered));
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = MockUserRepository::new();
        let user = User::new("a@b.com".to_string(), "hash".to_string());
        let created = repo.create(user.clone()).await.unwrap();

        assert_eq!(repo.find_by_id(created.id).await.unwrap(), Some(user.clone()));
        assert_eq!(repo.find_by_email("a@b.com").await.unwrap(), Some(user));
        assert!(repo.exists_by_email("a@b.com").await.unwrap());
        assert!(!repo.exists_by_email("other@b.com").await.unwrap());
    }

    #[tokio::test]
    async fn test_duplicate_email_is_conflict() {
        let repo = MockUserRepository::new();
        repo.create(User::new("a@b.com".to_string(), "h1".to_string()))
            .await
            .unwrap();

        let result = repo
            .create(User::new("a@b.com".to_string(), "h2".to_string()))
            .await;

        assert!(matches!(
            result,
            Err(DomainError::Auth(AuthError::EmailAlreadyRegistered))
        ));
    }
}

//! Chat message repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::message::ChatMessage;
use crate::errors::DomainError;

/// Repository trait for ChatMessage persistence operations
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Persist a new chat message
    async fn create(&self, message: ChatMessage) -> Result<ChatMessage, DomainError>;

    /// The most recent messages for a user, newest first
    async fn find_recent_by_user(
        &self,
        user_id: Uuid,
        limit: u32,
    ) -> Result<Vec<ChatMessage>, DomainError>;

    /// All messages for a user, oldest first
    async fn find_all_by_user(&self, user_id: Uuid)
        -> Result<Vec<ChatMessage>, DomainError>;
}

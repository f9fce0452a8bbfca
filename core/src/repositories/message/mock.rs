//! Mock implementation of MessageRepository for testing

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::message::ChatMessage;
use crate::errors::DomainError;

use super::trait_::MessageRepository;

/// Mock message repository for testing.
///
/// Messages are kept in insertion order, which doubles as chronological
/// order and keeps same-timestamp messages stable.
pub struct MockMessageRepository {
    messages: Arc<RwLock<Vec<ChatMessage>>>,
}

impl MockMessageRepository {
    pub fn new() -> Self {
        Self {
            messages: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl Default for MockMessageRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageRepository for MockMessageRepository {
    async fn create(&self, message: ChatMessage) -> Result<ChatMessage, DomainError> {
        let mut messages = self.messages.write().await;
        messages.push(message.clone());
        Ok(message)
    }

    async fn find_recent_by_user(
        &self,
        user_id: Uuid,
        limit: u32,
    ) -> Result<Vec<ChatMessage>, DomainError> {
        let messages = self.messages.read().await;
        Ok(messages
            .iter()
            .rev()
            .filter(|m| m.user_id == user_id)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn find_all_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<ChatMessage>, DomainError> {
        let messages = self.messages.read().await;
        Ok(messages
            .iter()
            .filter(|m| m.user_id == user_id)
            .cloned()
            .collect())
    }
}

//! Chat message entity for persisted conversation history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who authored a stored chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Message written by the user
    User,
    /// Reply produced by the completion service
    Assistant,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }
}

/// A single turn of a user's conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// Unique identifier for the message
    pub id: Uuid,

    /// User this message belongs to
    pub user_id: Uuid,

    /// Message text
    pub content: String,

    /// Message author role
    pub role: MessageRole,

    /// Timestamp when the message was created
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    /// Creates a new chat message
    pub fn new(user_id: Uuid, content: String, role: MessageRole) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            content,
            role,
            created_at: Utc::now(),
        }
    }
}

//! MySQL implementation of the MessageRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use pl_core::domain::entities::message::{ChatMessage, MessageRole};
use pl_core::errors::DomainError;
use pl_core::repositories::MessageRepository;

/// MySQL implementation of MessageRepository
pub struct MySqlMessageRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlMessageRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_message(row: &sqlx::mysql::MySqlRow) -> Result<ChatMessage, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Database {
            message: format!("failed to get id: {}", e),
        })?;
        let user_id: String = row.try_get("user_id").map_err(|e| DomainError::Database {
            message: format!("failed to get user_id: {}", e),
        })?;
        let role: String = row.try_get("role").map_err(|e| DomainError::Database {
            message: format!("failed to get role: {}", e),
        })?;

        let role = match role.as_str() {
            "assistant" => MessageRole::Assistant,
            _ => MessageRole::User,
        };

        Ok(ChatMessage {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Database {
                message: format!("invalid UUID: {}", e),
            })?,
            user_id: Uuid::parse_str(&user_id).map_err(|e| DomainError::Database {
                message: format!("invalid UUID: {}", e),
            })?,
            content: row.try_get("content").map_err(|e| DomainError::Database {
                message: format!("failed to get content: {}", e),
            })?,
            role,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database {
                    message: format!("failed to get created_at: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl MessageRepository for MySqlMessageRepository {
    async fn create(&self, message: ChatMessage) -> Result<ChatMessage, DomainError> {
        let query = r#"
            INSERT INTO messages (id, user_id, content, role, created_at)
            VALUES (?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(message.id.to_string())
            .bind(message.user_id.to_string())
            .bind(&message.content)
            .bind(message.role.as_str())
            .bind(message.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("failed to create message: {}", e),
            })?;

        Ok(message)
    }

    async fn find_recent_by_user(
        &self,
        user_id: Uuid,
        limit: u32,
    ) -> Result<Vec<ChatMessage>, DomainError> {
        let query = r#"
            SELECT id, user_id, content, role, created_at
            FROM messages
            WHERE user_id = ?
            ORDER BY created_at DESC
            LIMIT ?
        "#;

        let rows = sqlx::query(query)
            .bind(user_id.to_string())
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("database query failed: {}", e),
            })?;

        rows.iter().map(Self::row_to_message).collect()
    }

    async fn find_all_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<ChatMessage>, DomainError> {
        let query = r#"
            SELECT id, user_id, content, role, created_at
            FROM messages
            WHERE user_id = ?
            ORDER BY created_at ASC
        "#;

        let rows = sqlx::query(query)
            .bind(user_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("database query failed: {}", e),
            })?;

        rows.iter().map(Self::row_to_message).collect()
    }
}

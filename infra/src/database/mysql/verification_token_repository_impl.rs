//! MySQL implementation of the VerificationTokenRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use pl_core::domain::entities::verification_token::VerificationToken;
use pl_core::errors::DomainError;
use pl_core::repositories::VerificationTokenRepository;

/// MySQL implementation of VerificationTokenRepository
pub struct MySqlVerificationTokenRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlVerificationTokenRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_token(row: &sqlx::mysql::MySqlRow) -> Result<VerificationToken, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Database {
            message: format!("failed to get id: {}", e),
        })?;
        let user_id: String = row.try_get("user_id").map_err(|e| DomainError::Database {
            message: format!("failed to get user_id: {}", e),
        })?;

        Ok(VerificationToken {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Database {
                message: format!("invalid UUID: {}", e),
            })?,
            user_id: Uuid::parse_str(&user_id).map_err(|e| DomainError::Database {
                message: format!("invalid UUID: {}", e),
            })?,
            token: row.try_get("token").map_err(|e| DomainError::Database {
                message: format!("failed to get token: {}", e),
            })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database {
                    message: format!("failed to get created_at: {}", e),
                })?,
            expires_at: row
                .try_get::<DateTime<Utc>, _>("expires_at")
                .map_err(|e| DomainError::Database {
                    message: format!("failed to get expires_at: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl VerificationTokenRepository for MySqlVerificationTokenRepository {
    async fn create(
        &self,
        token: VerificationToken,
    ) -> Result<VerificationToken, DomainError> {
        let query = r#"
            INSERT INTO verification_tokens (id, user_id, token, created_at, expires_at)
            VALUES (?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(token.id.to_string())
            .bind(token.user_id.to_string())
            .bind(&token.token)
            .bind(token.created_at)
            .bind(token.expires_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("failed to create verification token: {}", e),
            })?;

        Ok(token)
    }

    async fn find_by_token(
        &self,
        token: &str,
    ) -> Result<Option<VerificationToken>, DomainError> {
        let query = r#"
            SELECT id, user_id, token, created_at, expires_at
            FROM verification_tokens
            WHERE token = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_token(&row)?)),
            None => Ok(None),
        }
    }

    async fn consume(&self, token: &VerificationToken) -> Result<(), DomainError> {
        // verified flag and token deletion move together or not at all
        let mut tx = self.pool.begin().await.map_err(|e| DomainError::Database {
            message: format!("failed to begin transaction: {}", e),
        })?;

        let deleted = sqlx::query("DELETE FROM verification_tokens WHERE id = ?")
            .bind(token.id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("failed to delete verification token: {}", e),
            })?;

        if deleted.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: "verification token".to_string(),
            });
        }

        let updated = sqlx::query(
            "UPDATE users SET is_verified = TRUE, updated_at = ? WHERE id = ?",
        )
        .bind(Utc::now())
        .bind(token.user_id.to_string())
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::Database {
            message: format!("failed to verify user: {}", e),
        })?;

        if updated.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: "user".to_string(),
            });
        }

        tx.commit().await.map_err(|e| DomainError::Database {
            message: format!("failed to commit transaction: {}", e),
        })?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM verification_tokens WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("failed to delete verification token: {}", e),
            })?;

        Ok(result.rows_affected() > 0)
    }
}

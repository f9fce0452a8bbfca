//! Chat orchestration: persist turns, build the prompt, call the model.

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::message::{ChatMessage, MessageRole};
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::MessageRepository;

use super::completion::CompletionServiceTrait;

/// How many recent messages to fetch for prompt context. The fetch happens
/// after the current message is stored, so the window includes it; the
/// current message is excluded again when the prompt is built.
pub const CONTEXT_MESSAGE_WINDOW: u32 = 7;

/// Chat service orchestrating history persistence and completion calls
pub struct ChatService<M, G>
where
    M: MessageRepository,
    G: CompletionServiceTrait,
{
    /// Message repository for conversation history
    message_repository: Arc<M>,
    /// External text-completion collaborator
    completion_service: Arc<G>,
}

impl<M, G> ChatService<M, G>
where
    M: MessageRepository,
    G: CompletionServiceTrait,
{
    /// Create a new chat service
    pub fn new(message_repository: Arc<M>, completion_service: Arc<G>) -> Self {
        Self {
            message_repository,
            completion_service,
        }
    }

    /// Handle one chat turn: store the user message, generate a reply with
    /// recent history as context, store and return the reply.
    pub async fn send_message(
        &self,
        user_id: Uuid,
        message: &str,
        spreadsheet_context: Option<&str>,
    ) -> DomainResult<ChatMessage> {
        if message.trim().is_empty() {
            return Err(ValidationError::EmptyMessage.into());
        }

        self.message_repository
            .create(ChatMessage::new(
                user_id,
                message.to_string(),
                MessageRole::User,
            ))
            .await?;

        // newest first, including the message just stored
        let recent = self
            .message_repository
            .find_recent_by_user(user_id, CONTEXT_MESSAGE_WINDOW)
            .await?;
        // chronological order, current message excluded
        let context: Vec<&ChatMessage> = recent.iter().skip(1).rev().collect();

        let prompt = build_prompt(message, &context, spreadsheet_context);
        tracing::debug!(prompt_len = prompt.len(), "sending completion request");

        let reply = self
            .completion_service
            .generate(&prompt)
            .await
            .map_err(|e| {
                tracing::error!("completion request failed: {}", e);
                DomainError::Internal {
                    message: "failed to generate content".to_string(),
                }
            })?;

        let assistant_message = self
            .message_repository
            .create(ChatMessage::new(user_id, reply, MessageRole::Assistant))
            .await?;

        Ok(assistant_message)
    }

    /// Full conversation history for a user, oldest first
    pub async fn history(&self, user_id: Uuid) -> DomainResult<Vec<ChatMessage>> {
        self.message_repository.find_all_by_user(user_id).await
    }
}

/// Build the plain-text prompt sent to the completion service
pub(super) fn build_prompt(
    message: &str,
    context: &[&ChatMessage],
    spreadsheet_context: Option<&str>,
) -> String {
    let mut prompt = String::new();

    if let Some(sheet) = spreadsheet_context.filter(|s| !s.trim().is_empty()) {
        prompt.push_str("Spreadsheet context:\n");
        prompt.push_str(sheet);
        prompt.push_str("\n\n");
    }

    if !context.is_empty() {
        prompt.push_str("Previous conversation:\n");
        for m in context {
            match m.role {
                MessageRole::User => {
                    prompt.push_str(&format!("User: {}\n", m.content));
                }
                MessageRole::Assistant => {
                    prompt.push_str(&format!("Assistant: {}\n", m.content));
                }
            }
        }
        prompt.push_str("\nCurrent message:\n");
    }

    prompt.push_str(&format!("User: {}", message));
    prompt
}

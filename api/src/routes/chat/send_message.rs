//! Handler for POST /messages

use actix_web::{web, HttpResponse};
use validator::Validate;

use pl_core::errors::ValidationError;
use pl_core::repositories::{MessageRepository, UserRepository, VerificationTokenRepository};
use pl_core::services::auth::EmailServiceTrait;
use pl_core::services::chat::CompletionServiceTrait;

use crate::app::AppState;
use crate::dto::chat::{SendMessageRequest, SendMessageResponse};
use crate::handlers::to_response;
use crate::middleware::AuthContext;

/// Send a chat message and return the model's reply.
///
/// # Responses
/// - `201` `{aiMessage}` - reply generated and stored
/// - `400` - empty message
/// - `500` - completion service failure
pub async fn send_message<U, V, M, E, G>(
    state: web::Data<AppState<U, V, M, E, G>>,
    auth: AuthContext,
    request: web::Json<SendMessageRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    V: VerificationTokenRepository + 'static,
    M: MessageRepository + 'static,
    E: EmailServiceTrait + 'static,
    G: CompletionServiceTrait + 'static,
{
    if request.0.validate().is_err() {
        return to_response(&ValidationError::EmptyMessage.into());
    }

    log::info!("processing chat message for user {}", auth.user_id);

    match state
        .chat_service
        .send_message(
            auth.user_id,
            &request.message,
            request.spreadsheet_context.as_deref(),
        )
        .await
    {
        Ok(reply) => HttpResponse::Created().json(SendMessageResponse {
            ai_message: reply.content,
        }),
        Err(error) => {
            log::error!("chat message failed for user {}: {}", auth.user_id, error);
            to_response(&error)
        }
    }
}

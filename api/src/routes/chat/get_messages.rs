//! Handler for GET /messages

use actix_web::{web, HttpResponse};

use pl_core::repositories::{MessageRepository, UserRepository, VerificationTokenRepository};
use pl_core::services::auth::EmailServiceTrait;
use pl_core::services::chat::CompletionServiceTrait;

use crate::app::AppState;
use crate::dto::chat::MessagesResponse;
use crate::handlers::to_response;
use crate::middleware::AuthContext;

/// Return the authenticated user's conversation history, oldest first.
///
/// # Responses
/// - `200` `{messages: [...]}`
/// - `500` - store failure
pub async fn get_messages<U, V, M, E, G>(
    state: web::Data<AppState<U, V, M, E, G>>,
    auth: AuthContext,
) -> HttpResponse
where
    U: UserRepository + 'static,
    V: VerificationTokenRepository + 'static,
    M: MessageRepository + 'static,
    E: EmailServiceTrait + 'static,
    G: CompletionServiceTrait + 'static,
{
    match state.chat_service.history(auth.user_id).await {
        Ok(messages) => HttpResponse::Ok().json(MessagesResponse { messages }),
        Err(error) => {
            log::error!("history fetch failed for user {}: {}", auth.user_id, error);
            to_response(&error)
        }
    }
}

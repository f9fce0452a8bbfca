//! Handler for GET /auth/verify-email

use actix_web::{web, HttpResponse};

use pl_core::repositories::{MessageRepository, UserRepository, VerificationTokenRepository};
use pl_core::services::auth::EmailServiceTrait;
use pl_core::services::chat::CompletionServiceTrait;

use crate::app::AppState;
use crate::dto::auth::{VerifyEmailQuery, VerifyEmailResponse};
use crate::handlers::to_response;

/// Consume a verification token from the emailed link.
///
/// # Responses
/// - `200` `{message}` - email verified
/// - `400` - token expired
/// - `404` - token unknown or already consumed
pub async fn verify_email<U, V, M, E, G>(
    state: web::Data<AppState<U, V, M, E, G>>,
    query: web::Query<VerifyEmailQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    V: VerificationTokenRepository + 'static,
    M: MessageRepository + 'static,
    E: EmailServiceTrait + 'static,
    G: CompletionServiceTrait + 'static,
{
    match state.auth_service.verify_email(&query.token).await {
        Ok(()) => HttpResponse::Ok().json(VerifyEmailResponse {
            message: "email verified!".to_string(),
        }),
        Err(error) => {
            log::warn!("email verification failed: {}", error);
            to_response(&error)
        }
    }
}

//! Handler for POST /auth/signup

use actix_web::{web, HttpResponse};

use pl_core::repositories::{MessageRepository, UserRepository, VerificationTokenRepository};
use pl_core::services::auth::{mask_email, EmailServiceTrait};
use pl_core::services::chat::CompletionServiceTrait;

use crate::app::AppState;
use crate::dto::auth::{SignupRequest, SignupResponse};
use crate::handlers::to_response;

/// Register a new account.
///
/// # Responses
/// - `201` `{message, userId}` - account created, verification email sent
/// - `400` - missing or invalid credentials
/// - `409` - email already registered
/// - `500` - verification email could not be dispatched (the account is
///   still created; see the registration flow docs)
pub async fn signup<U, V, M, E, G>(
    state: web::Data<AppState<U, V, M, E, G>>,
    request: web::Json<SignupRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    V: VerificationTokenRepository + 'static,
    M: MessageRepository + 'static,
    E: EmailServiceTrait + 'static,
    G: CompletionServiceTrait + 'static,
{
    log::info!("processing signup for {}", mask_email(&request.email));

    match state
        .auth_service
        .register(&request.email, &request.password)
        .await
    {
        Ok(user_id) => HttpResponse::Created().json(SignupResponse {
            message: "user created".to_string(),
            user_id,
        }),
        Err(error) => {
            log::warn!("signup failed for {}: {}", mask_email(&request.email), error);
            to_response(&error)
        }
    }
}

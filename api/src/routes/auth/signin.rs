//! Handler for POST /auth/signin

use actix_web::{web, HttpResponse};

use pl_core::repositories::{MessageRepository, UserRepository, VerificationTokenRepository};
use pl_core::services::auth::{mask_email, EmailServiceTrait};
use pl_core::services::chat::CompletionServiceTrait;

use crate::app::AppState;
use crate::dto::auth::{SigninRequest, SigninResponse};
use crate::handlers::to_response;

/// Validate credentials and mint a bearer token.
///
/// # Responses
/// - `200` `{message, token}` - signed in
/// - `401` - wrong password
/// - `403` - email not verified
/// - `404` - no account with this email
pub async fn signin<U, V, M, E, G>(
    state: web::Data<AppState<U, V, M, E, G>>,
    request: web::Json<SigninRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    V: VerificationTokenRepository + 'static,
    M: MessageRepository + 'static,
    E: EmailServiceTrait + 'static,
    G: CompletionServiceTrait + 'static,
{
    match state
        .auth_service
        .login(&request.email, &request.password)
        .await
    {
        Ok(token) => HttpResponse::Ok().json(SigninResponse {
            message: "logged in".to_string(),
            token,
        }),
        Err(error) => {
            log::warn!("signin failed for {}: {}", mask_email(&request.email), error);
            to_response(&error)
        }
    }
}

//! Application state and factory
//!
//! This module holds the shared application state and the factory that
//! assembles the Actix-web application: middleware, routes, and the
//! bearer-token gate in front of the protected scopes.

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App, Error, HttpResponse,
};

use pl_core::repositories::{MessageRepository, UserRepository, VerificationTokenRepository};
use pl_core::services::auth::{AuthService, EmailServiceTrait};
use pl_core::services::chat::{ChatService, CompletionServiceTrait};
use pl_core::services::token::TokenService;

use crate::middleware::{auth::BearerAuth, cors::create_cors};
use crate::routes::auth::{signin::signin, signup::signup, verify_email::verify_email};
use crate::routes::chat::{get_messages::get_messages, send_message::send_message};
use crate::routes::users::me::me;

/// Application state that holds the shared services
pub struct AppState<U, V, M, E, G>
where
    U: UserRepository,
    V: VerificationTokenRepository,
    M: MessageRepository,
    E: EmailServiceTrait,
    G: CompletionServiceTrait,
{
    pub auth_service: Arc<AuthService<U, V, E>>,
    pub chat_service: Arc<ChatService<M, G>>,
    pub token_service: Arc<TokenService>,
}

/// Create and configure the application with all dependencies
pub fn create_app<U, V, M, E, G>(
    app_state: web::Data<AppState<U, V, M, E, G>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    V: VerificationTokenRepository + 'static,
    M: MessageRepository + 'static,
    E: EmailServiceTrait + 'static,
    G: CompletionServiceTrait + 'static,
{
    let cors = create_cors();
    let bearer_auth = BearerAuth::new(Arc::clone(&app_state.token_service));

    App::new()
        .app_data(app_state.clone())
        // malformed JSON bodies get the same wire shape as domain errors
        .app_data(web::JsonConfig::default().error_handler(|err, _req| {
            actix_web::error::InternalError::from_response(
                err,
                HttpResponse::BadRequest()
                    .json(serde_json::json!({ "error": "invalid request body" })),
            )
            .into()
        }))
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // Public auth routes
        .service(
            web::scope("/auth")
                .route("/signup", web::post().to(signup::<U, V, M, E, G>))
                .route("/verify-email", web::get().to(verify_email::<U, V, M, E, G>))
                .route("/signin", web::post().to(signin::<U, V, M, E, G>)),
        )
        // Protected routes behind the bearer gate
        .service(
            web::scope("/users")
                .wrap(bearer_auth.clone())
                .route("/me", web::get().to(me)),
        )
        .service(
            web::scope("/messages")
                .wrap(bearer_auth)
                .service(
                    web::resource("")
                        .route(web::post().to(send_message::<U, V, M, E, G>))
                        .route(web::get().to(get_messages::<U, V, M, E, G>)),
                ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "parley-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "the requested resource was not found"
    }))
}

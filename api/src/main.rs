use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::info;
use std::io;
use std::sync::Arc;

use pl_api::app::{create_app, AppState};
use pl_core::services::auth::{AuthService, AuthServiceConfig};
use pl_core::services::chat::ChatService;
use pl_core::services::password::PasswordService;
use pl_core::services::token::{TokenService, TokenServiceConfig};
use pl_infra::ai::AnyCompletionService;
use pl_infra::database::{
    DatabasePool, MySqlMessageRepository, MySqlUserRepository,
    MySqlVerificationTokenRepository,
};
use pl_infra::email::AnyEmailService;
use pl_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("starting Parley API server");

    // Configuration is read once here; everything downstream receives
    // immutable structs
    let config = AppConfig::from_env();
    if config.auth.is_using_default_secret() {
        log::warn!("JWT_SECRET is not set, using the default development secret");
    }

    let pool = DatabasePool::new(&config.database)
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

    let user_repository = Arc::new(MySqlUserRepository::new(pool.get_pool().clone()));
    let token_repository = Arc::new(MySqlVerificationTokenRepository::new(
        pool.get_pool().clone(),
    ));
    let message_repository = Arc::new(MySqlMessageRepository::new(pool.get_pool().clone()));

    let email_service = Arc::new(
        AnyEmailService::from_config(&config.email)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?,
    );
    let completion_service = Arc::new(
        AnyCompletionService::from_config(&config.ai)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?,
    );

    let token_service = Arc::new(TokenService::new(TokenServiceConfig {
        jwt_secret: config.auth.jwt_secret.clone(),
        expiry_hours: config.auth.token_expiry_hours,
    }));

    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_repository),
        Arc::clone(&token_repository),
        Arc::clone(&email_service),
        PasswordService::default(),
        Arc::clone(&token_service),
        AuthServiceConfig {
            min_password_length: config.auth.min_password_length,
            verification_expiry_hours: config.auth.verification_expiry_hours,
            base_url: config.auth.base_url.clone(),
        },
    ));

    let chat_service = Arc::new(ChatService::new(
        Arc::clone(&message_repository),
        Arc::clone(&completion_service),
    ));

    let app_state = web::Data::new(AppState {
        auth_service,
        chat_service,
        token_service,
    });

    let bind_address = config.server.bind_address();
    info!("server will bind to: {}", bind_address);

    HttpServer::new(move || create_app(app_state.clone()))
        .bind(&bind_address)?
        .run()
        .await
}

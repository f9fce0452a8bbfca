//! Shared harness for the API integration tests: a fully mock-backed
//! application plus helpers to reach into the stores.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use actix_web::web;
use tokio::sync::RwLock;
use uuid::Uuid;

use pl_api::app::AppState;
use pl_core::domain::entities::VerificationToken;
use pl_core::repositories::{
    MockMessageRepository, MockUserRepository, MockVerificationTokenRepository,
};
use pl_core::services::auth::{AuthService, AuthServiceConfig};
use pl_core::services::chat::ChatService;
use pl_core::services::password::PasswordService;
use pl_core::services::token::{TokenService, TokenServiceConfig};
use pl_infra::ai::MockCompletionService;
use pl_infra::email::MockEmailService;

pub const TEST_SECRET: &str = "integration-test-secret";
pub const CANNED_REPLY: &str = "canned reply";

pub type TestState = AppState<
    MockUserRepository,
    MockVerificationTokenRepository,
    MockMessageRepository,
    MockEmailService,
    MockCompletionService,
>;

pub struct TestHarness {
    pub state: web::Data<TestState>,
    pub tokens: Arc<RwLock<HashMap<Uuid, VerificationToken>>>,
}

/// Build a mock-backed application state
pub fn harness() -> TestHarness {
    harness_with_mailer(MockEmailService::new())
}

/// Build a mock-backed application state with a custom mailer
pub fn harness_with_mailer(mailer: MockEmailService) -> TestHarness {
    let user_repo = Arc::new(MockUserRepository::new());
    let token_repo = Arc::new(MockVerificationTokenRepository::new(
        user_repo.users_handle(),
    ));
    let tokens = token_repo.tokens_handle();
    let message_repo = Arc::new(MockMessageRepository::new());
    let email_service = Arc::new(mailer);
    let completion_service = Arc::new(MockCompletionService::with_reply(CANNED_REPLY));

    let token_service = Arc::new(TokenService::new(TokenServiceConfig::new(TEST_SECRET)));

    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_repo),
        Arc::clone(&token_repo),
        Arc::clone(&email_service),
        PasswordService::new(4),
        Arc::clone(&token_service),
        AuthServiceConfig::default(),
    ));

    let chat_service = Arc::new(ChatService::new(
        Arc::clone(&message_repo),
        Arc::clone(&completion_service),
    ));

    TestHarness {
        state: web::Data::new(AppState {
            auth_service,
            chat_service,
            token_service,
        }),
        tokens,
    }
}

impl TestHarness {
    /// The stored verification token value for a given user
    pub async fn token_value_for(&self, user_id: Uuid) -> String {
        let tokens = self.tokens.read().await;
        tokens
            .values()
            .find(|t| t.user_id == user_id)
            .expect("verification token for user")
            .token
            .clone()
    }
}

/// A bearer token signed with the test secret but already expired
pub fn expired_bearer_token(user_id: Uuid) -> String {
    let service = TokenService::new(TokenServiceConfig {
        jwt_secret: TEST_SECRET.to_string(),
        expiry_hours: -1,
    });
    service.issue(user_id).expect("token issuance")
}

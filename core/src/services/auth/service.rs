//! Main authentication service implementation

use std::sync::Arc;
use uuid::Uuid;

use pl_shared::utils::validation;

use crate::domain::entities::user::User;
use crate::domain::entities::verification_token::VerificationToken;
use crate::errors::{AuthError, DomainResult, ValidationError};
use crate::repositories::{UserRepository, VerificationTokenRepository};
use crate::services::password::PasswordService;
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;
use super::mailer::EmailServiceTrait;

/// Subject line of the verification email
const VERIFICATION_SUBJECT: &str = "Verify your account";

/// Authentication service for the registration, verification and login flows
pub struct AuthService<U, V, E>
where
    U: UserRepository,
    V: VerificationTokenRepository,
    E: EmailServiceTrait,
{
    /// User repository for database operations
    user_repository: Arc<U>,
    /// Verification token repository
    token_repository: Arc<V>,
    /// External mailer collaborator
    email_service: Arc<E>,
    /// Password hashing service
    password_service: PasswordService,
    /// Bearer token service
    token_service: Arc<TokenService>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U, V, E> AuthService<U, V, E>
where
    U: UserRepository,
    V: VerificationTokenRepository,
    E: EmailServiceTrait,
{
    /// Create a new authentication service
    pub fn new(
        user_repository: Arc<U>,
        token_repository: Arc<V>,
        email_service: Arc<E>,
        password_service: PasswordService,
        token_service: Arc<TokenService>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            token_repository,
            email_service,
            password_service,
            token_service,
            config,
        }
    }

    /// Register a new account.
    ///
    /// Creates an unverified user, persists a verification token bound to it
    /// and dispatches the verification email. A mailer failure surfaces as
    /// an error but does NOT roll back the created user or token; the
    /// account stays registered and unverified (at-least-once semantics).
    pub async fn register(&self, email: &str, password: &str) -> DomainResult<Uuid> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(ValidationError::MissingCredentials.into());
        }
        if password.len() < self.config.min_password_length {
            return Err(ValidationError::PasswordTooShort.into());
        }
        if !validation::is_valid_email(email) {
            return Err(ValidationError::InvalidEmail.into());
        }

        // Pre-check for a friendly error; a concurrent registration racing
        // past this point is caught by the store's unique constraint.
        if self.user_repository.exists_by_email(email).await? {
            return Err(AuthError::EmailAlreadyRegistered.into());
        }

        let password_hash = self.password_service.hash(password)?;
        let user = self
            .user_repository
            .create(User::new(email.to_string(), password_hash))
            .await?;

        let token = self
            .token_repository
            .create(VerificationToken::new_with_expiration(
                user.id,
                self.config.verification_expiry_hours,
            ))
            .await?;

        tracing::info!(user_id = %user.id, "registered new user");

        self.send_verification_email(&user.email, &token.token)
            .await?;

        Ok(user.id)
    }

    /// Consume a verification token, marking the owning user verified.
    ///
    /// Expired tokens are deleted when detected so an expired-but-present
    /// token can never be replayed later. Consumption itself is atomic with
    /// the user flag update (one store transaction).
    pub async fn verify_email(&self, token: &str) -> DomainResult<()> {
        let record = self
            .token_repository
            .find_by_token(token)
            .await?
            .ok_or(AuthError::VerificationTokenNotFound)?;

        if record.is_expired() {
            self.token_repository.delete(record.id).await?;
            return Err(AuthError::VerificationTokenExpired.into());
        }

        self.token_repository.consume(&record).await?;

        tracing::info!(user_id = %record.user_id, "email verified");
        Ok(())
    }

    /// Validate credentials and mint a bearer token.
    ///
    /// An unknown email and a wrong password produce distinct errors; this
    /// leaks account existence and is kept for client compatibility.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<String> {
        let user = self
            .user_repository
            .find_by_email(email.trim())
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if !user.is_verified {
            return Err(AuthError::EmailNotVerified.into());
        }

        if !self
            .password_service
            .verify(password, &user.password_hash)?
        {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.token_service.issue(user.id)?;

        tracing::info!(user_id = %user.id, "user logged in");
        Ok(token)
    }

    async fn send_verification_email(&self, email: &str, token: &str) -> DomainResult<()> {
        let link = format!(
            "{}/auth/verify-email?token={}",
            self.config.base_url, token
        );
        let html = format!(
            "<p>Click the link below to verify your email</p><a href=\"{}\">Click here!</a>",
            link
        );

        if let Err(e) = self
            .email_service
            .send_email(email, VERIFICATION_SUBJECT, &html)
            .await
        {
            tracing::error!("verification email dispatch failed: {}", e);
            return Err(AuthError::EmailDispatchFailed.into());
        }

        Ok(())
    }
}

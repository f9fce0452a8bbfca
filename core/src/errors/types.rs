//! Domain-specific error types for authentication and related operations.
//!
//! The `#[error]` strings double as the wire-level messages returned in
//! `{"error": ...}` bodies, so they are phrased for clients.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("user not found")]
    UserNotFound,

    #[error("the email is already used")]
    EmailAlreadyRegistered,

    #[error("email not verified")]
    EmailNotVerified,

    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("invalid verification token")]
    VerificationTokenNotFound,

    #[error("verification token has expired")]
    VerificationTokenExpired,

    #[error("failed to send verification email")]
    EmailDispatchFailed,
}

/// Bearer-token errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("token expired")]
    TokenExpired,

    #[error("invalid token format")]
    InvalidTokenFormat,

    #[error("invalid signature")]
    InvalidSignature,

    #[error("invalid claims")]
    InvalidClaims,

    #[error("token generation failed")]
    TokenGenerationFailed,
}

/// Password hashing errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PasswordError {
    #[error("password hashing failed")]
    HashingFailed,

    #[error("malformed password hash")]
    InvalidHash,
}

/// Input validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("email and password are required")]
    MissingCredentials,

    #[error("password must be at least 8 characters")]
    PasswordTooShort,

    #[error("invalid email format")]
    InvalidEmail,

    #[error("message is required")]
    EmptyMessage,
}

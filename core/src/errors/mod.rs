//! Domain-specific error types and error handling.

mod types;

pub use types::{AuthError, PasswordError, TokenError, ValidationError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("validation error: {message}")]
    Validation { message: String },

    #[error("resource not found: {resource}")]
    NotFound { resource: String },

    #[error("unauthorized access")]
    Unauthorized,

    #[error("database error: {message}")]
    Database { message: String },

    #[error("internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Password(#[from] PasswordError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transparent_messages() {
        let err: DomainError = AuthError::EmailAlreadyRegistered.into();
        assert_eq!(err.to_string(), "the email is already used");

        let err: DomainError = ValidationError::PasswordTooShort.into();
        assert_eq!(err.to_string(), "password must be at least 8 characters");

        let err: DomainError = TokenError::TokenExpired.into();
        assert_eq!(err.to_string(), "token expired");
    }
}

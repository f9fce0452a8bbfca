//! Domain error to HTTP response translation.
//!
//! Every error crossing the boundary becomes a status code plus a JSON
//! `{"error": message}` body. Database and internal details are logged, not
//! leaked.

use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

use pl_core::errors::{AuthError, DomainError};

/// Wire shape of every error body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Translate a domain error into its HTTP response
pub fn to_response(error: &DomainError) -> HttpResponse {
    let (status, message) = match error {
        DomainError::ValidationErr(e) => (StatusCode::BAD_REQUEST, e.to_string()),

        DomainError::Auth(e) => (auth_status(e), e.to_string()),

        DomainError::Token(e) => (StatusCode::UNAUTHORIZED, e.to_string()),

        DomainError::Unauthorized => {
            (StatusCode::UNAUTHORIZED, "unauthorized".to_string())
        }

        DomainError::NotFound { resource } => {
            (StatusCode::NOT_FOUND, format!("{} not found", resource))
        }

        DomainError::Validation { message } => (StatusCode::BAD_REQUEST, message.clone()),

        DomainError::Internal { message } => {
            log::error!("internal error: {}", message);
            (StatusCode::INTERNAL_SERVER_ERROR, message.clone())
        }

        DomainError::Database { message } => {
            log::error!("database error: {}", message);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal server error".to_string(),
            )
        }

        DomainError::Password(e) => {
            log::error!("password hashing error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal server error".to_string(),
            )
        }
    };

    HttpResponse::build(status).json(ErrorBody { error: message })
}

fn auth_status(error: &AuthError) -> StatusCode {
    match error {
        AuthError::UserNotFound => StatusCode::NOT_FOUND,
        AuthError::EmailAlreadyRegistered => StatusCode::CONFLICT,
        AuthError::EmailNotVerified => StatusCode::FORBIDDEN,
        AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        AuthError::VerificationTokenNotFound => StatusCode::NOT_FOUND,
        AuthError::VerificationTokenExpired => StatusCode::BAD_REQUEST,
        AuthError::EmailDispatchFailed => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pl_core::errors::ValidationError;

    #[test]
    fn test_status_mapping() {
        let cases: Vec<(DomainError, StatusCode)> = vec![
            (
                ValidationError::PasswordTooShort.into(),
                StatusCode::BAD_REQUEST,
            ),
            (
                AuthError::EmailAlreadyRegistered.into(),
                StatusCode::CONFLICT,
            ),
            (AuthError::UserNotFound.into(), StatusCode::NOT_FOUND),
            (AuthError::EmailNotVerified.into(), StatusCode::FORBIDDEN),
            (
                AuthError::InvalidCredentials.into(),
                StatusCode::UNAUTHORIZED,
            ),
            (
                AuthError::VerificationTokenExpired.into(),
                StatusCode::BAD_REQUEST,
            ),
            (
                AuthError::EmailDispatchFailed.into(),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                DomainError::Database {
                    message: "boom".to_string(),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(to_response(&error).status(), expected, "{:?}", error);
        }
    }
}

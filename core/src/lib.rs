//! # Parley Core
//!
//! Core business logic and domain layer for the Parley backend.
//! This crate contains domain entities, business services, repository
//! interfaces, and error types that form the foundation of the application
//! architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{ChatMessage, Claims, MessageRole, User, VerificationToken};
pub use errors::{
    AuthError, DomainError, DomainResult, PasswordError, TokenError, ValidationError,
};
pub use repositories::{
    MessageRepository, MockMessageRepository, MockUserRepository,
    MockVerificationTokenRepository, UserRepository, VerificationTokenRepository,
};
pub use services::{
    AuthService, AuthServiceConfig, ChatService, CompletionServiceTrait, EmailServiceTrait,
    PasswordService, TokenService, TokenServiceConfig,
};

//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the Parley backend.
//! It provides concrete implementations for the repository and collaborator
//! traits defined in `pl_core`:
//!
//! - **Database**: MySQL implementations using SQLx
//! - **Email**: Resend HTTP mailer, plus a console mock for development
//! - **AI**: Gemini text-completion client, plus a canned mock

pub mod ai;
pub mod database;
pub mod email;

use thiserror::Error;

/// Errors raised while constructing or operating infrastructure services
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("email service error: {0}")]
    Email(String),

    #[error("completion service error: {0}")]
    Completion(String),
}

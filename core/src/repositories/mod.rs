//! Repository interfaces for data persistence.
//!
//! Each repository is an async trait implemented by the infrastructure
//! layer; in-memory mock implementations live alongside the traits for use
//! in unit and integration tests.

pub mod message;
pub mod user;
pub mod verification_token;

pub use message::{MessageRepository, MockMessageRepository};
pub use user::{MockUserRepository, UserRepository};
pub use verification_token::{MockVerificationTokenRepository, VerificationTokenRepository};

//! Domain entities representing core business objects.

pub mod message;
pub mod token;
pub mod user;
pub mod verification_token;

// Re-export commonly used types
pub use message::{ChatMessage, MessageRole};
pub use token::{Claims, BEARER_TOKEN_EXPIRY_HOURS};
pub use user::User;
pub use verification_token::{
    VerificationToken, DEFAULT_EXPIRATION_HOURS, TOKEN_BYTES, TOKEN_LENGTH,
};

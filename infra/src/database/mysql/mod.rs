//! MySQL repository implementations.

pub mod message_repository_impl;
pub mod user_repository_impl;
pub mod verification_token_repository_impl;

pub use message_repository_impl::MySqlMessageRepository;
pub use user_repository_impl::MySqlUserRepository;
pub use verification_token_repository_impl::MySqlVerificationTokenRepository;

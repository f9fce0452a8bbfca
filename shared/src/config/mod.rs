//! Configuration types for the Parley server.
//!
//! Every config struct is loaded once at process start (`AppConfig::from_env`)
//! and passed down to the components that need it. Nothing reads the
//! environment after startup.

pub mod ai;
pub mod auth;
pub mod database;
pub mod email;
pub mod server;

pub use ai::AiConfig;
pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use email::EmailConfig;
pub use server::ServerConfig;

/// Top-level application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub email: EmailConfig,
    pub ai: AiConfig,
}

impl AppConfig {
    /// Load the full configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            auth: AuthConfig::from_env(),
            email: EmailConfig::from_env(),
            ai: AiConfig::from_env(),
        }
    }
}

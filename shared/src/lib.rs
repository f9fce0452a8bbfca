//! Shared utilities and common types for the Parley server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded once at startup
//! - Validation utilities (email format, etc.)

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AiConfig, AppConfig, AuthConfig, DatabaseConfig, EmailConfig, ServerConfig,
};
pub use utils::validation;

//! Route handlers.

pub mod auth;
pub mod chat;
pub mod users;

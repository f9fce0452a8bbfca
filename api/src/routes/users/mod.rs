//! User route handlers
//!
//! - `GET /users/me` - echo the gate-resolved identity

pub mod me;

//! Authentication route handlers
//!
//! - `POST /auth/signup` - register and dispatch a verification email
//! - `GET /auth/verify-email` - consume a verification token
//! - `POST /auth/signin` - validate credentials and mint a bearer token

pub mod signin;
pub mod signup;
pub mod verify_email;

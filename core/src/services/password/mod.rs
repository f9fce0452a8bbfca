//! Password hashing service built on bcrypt.

mod service;

pub use service::PasswordService;

//! Chat route handlers
//!
//! - `POST /messages` - send a message and receive the model reply
//! - `GET /messages` - full conversation history

pub mod get_messages;
pub mod send_message;

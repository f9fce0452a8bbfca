//! Chat request and response bodies.

use serde::{Deserialize, Serialize};
use validator::Validate;

use pl_core::domain::entities::message::ChatMessage;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    /// The user's chat message
    #[validate(length(min = 1))]
    pub message: String,

    /// Optional spreadsheet snapshot to ground the reply in
    #[serde(default)]
    pub spreadsheet_context: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageResponse {
    pub ai_message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagesResponse {
    pub messages: Vec<ChatMessage>,
}

//! Chat Endpoint
//!
//! Forwards a single free-text message to the backend assistant. The
//! transcript is never sent as context; each call carries only the
//! current message.

use serde::Serialize;

use super::{ApiClient, ApiError};
use crate::models::ChatReply;

#[derive(Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

impl ApiClient {
    /// POST /chat
    pub async fn chat(&self, message: &str) -> Result<ChatReply, ApiError> {
        self.post_json("/chat", &ChatRequest { message }).await
    }
}

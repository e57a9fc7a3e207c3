use std::error::Error as StdError;
use thiserror::Error;

use crate::config::AppConfig;
use crate::llm::gemini::{ Content, GeminiClient };
use crate::models::chat::ChatMessage;

/// Returned when the upstream answers 200 but the reply text cannot be
/// located in the body.
pub const FALLBACK_REPLY: &str = "I'm sorry, I couldn't generate a response right now.";

#[derive(Debug, Error)]
pub enum RelayError {
    /// Malformed or incomplete client request. Surfaced as HTTP 400.
    #[error("{0}")]
    Validation(String),

    /// Network-layer or non-2xx failure talking to the upstream API.
    /// Surfaced as HTTP 500.
    #[error("Failed to connect: {0}")]
    Upstream(String),

    /// Catch-all for any other failure while handling the request.
    /// Surfaced as HTTP 500.
    #[error("Server error: {0}")]
    Server(String),
}

/// Translates a frontend conversation into the upstream request shape,
/// performs the call, and extracts the reply. Holds no per-request state,
/// so one instance is shared across all handler invocations.
pub struct ChatRelay {
    client: GeminiClient,
    system_prompt: String,
}

impl ChatRelay {
    pub fn new(config: &AppConfig) -> Result<Self, Box<dyn StdError + Send + Sync>> {
        let client = GeminiClient::new(
            config.api_url.clone(),
            config.api_key.clone(),
            config.upstream_timeout,
        )?;
        Ok(Self {
            client,
            system_prompt: config.system_prompt.clone(),
        })
    }

    /// Upstream turn list: the system prompt first, then the conversation in
    /// order. Senders the upstream API has no role for produce no turn.
    pub fn build_contents(&self, messages: &[ChatMessage]) -> Vec<Content> {
        let mut contents = Vec::with_capacity(messages.len() + 1);
        contents.push(Content::user(self.system_prompt.clone()));
        for message in messages {
            match message.sender.as_str() {
                "user" => contents.push(Content::user(message.text.clone())),
                "bot" => contents.push(Content::model(message.text.clone())),
                _ => {}
            }
        }
        contents
    }

    pub async fn respond(&self, messages: &[ChatMessage]) -> Result<String, RelayError> {
        let contents = self.build_contents(messages);
        let response = self.client.generate(&contents).await.map_err(|e| {
            // A 2xx body that failed to decode is our fault to report as a
            // server error; everything else is the upstream connection.
            if e.is_decode() {
                RelayError::Server(e.to_string())
            } else {
                RelayError::Upstream(e.to_string())
            }
        })?;
        Ok(response.reply_text().unwrap_or_else(|| FALLBACK_REPLY.to_string()))
    }
}

//! HTTP client for the chatbot service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stub returning an error since the widget only talks to
//! the bot from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure collapses into `BotError`. The widget never shows the error
//! variant itself; it asks for `display_message` which walks the
//! server `reply` -> server `error` -> default chain.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "bot_test.rs"]
mod bot_test;

use super::types::{BotErrorBody, BotReply};
#[cfg(feature = "hydrate")]
use super::types::BotRequestBody;

/// Path of the chatbot endpoint, relative to the page origin.
pub const CHATBOT_ENDPOINT: &str = "/api/chatbot/";

/// Errors produced by a bot service call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BotError {
    /// The request never produced a response.
    #[error("bot request failed: {0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("bot service rejected request: status {status}")]
    Rejected { status: u16, reply: Option<String>, error: Option<String> },

    /// A success response body could not be decoded.
    #[error("bot response parse failed: {0}")]
    Decode(String),
}

impl BotError {
    /// Build a `Rejected` error from a status and raw response body.
    ///
    /// Bodies that are not JSON (proxies, HTML error pages) still yield a
    /// `Rejected` error, just without server-provided text.
    pub fn rejected(status: u16, body: &str) -> Self {
        let parsed = serde_json::from_str::<BotErrorBody>(body).unwrap_or_default();
        Self::Rejected { status, reply: parsed.reply, error: parsed.error }
    }

    /// Human-readable text for a bot message.
    ///
    /// Prefers the server `reply`, then the server `error`, then `default`.
    /// Blank server strings are skipped.
    pub fn display_message(&self, default: &str) -> String {
        match self {
            Self::Rejected { reply, error, .. } => reply
                .as_deref()
                .filter(|text| !text.trim().is_empty())
                .or_else(|| error.as_deref().filter(|text| !text.trim().is_empty()))
                .unwrap_or(default)
                .to_owned(),
            Self::Transport(_) | Self::Decode(_) => default.to_owned(),
        }
    }
}

/// Send `message` to the chatbot via `POST /api/chatbot/`.
///
/// `initial` asks the service for the greeting/recommendation payload
/// instead of answering a query.
///
/// # Errors
///
/// Returns `BotError` when the request fails, the service responds with a
/// non-success status, or the body cannot be decoded.
pub async fn send_message_to_bot(message: &str, initial: bool) -> Result<BotReply, BotError> {
    #[cfg(feature = "hydrate")]
    {
        let body = BotRequestBody { message, initial };
        let resp = gloo_net::http::Request::post(CHATBOT_ENDPOINT)
            .json(&body)
            .map_err(|e| BotError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| BotError::Transport(e.to_string()))?;
        if !resp.ok() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(BotError::rejected(status, &text));
        }
        resp.json::<BotReply>()
            .await
            .map_err(|e| BotError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (message, initial);
        Err(BotError::Transport("not available on server".to_owned()))
    }
}

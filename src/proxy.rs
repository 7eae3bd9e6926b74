//! Same-origin proxy for the chatbot service.
//!
//! DESIGN
//! ======
//! The widget always posts to `/api/chatbot/` on its own origin. This module
//! forwards that body verbatim to `BOT_SERVICE_URL` and passes the upstream
//! status and body back untouched, so the widget sees the service's own
//! `reply`/`error` fields. Only transport failures are rewritten, as a `502`
//! carrying `{"error": ...}`.

use std::time::Instant;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::config::BotTimeouts;
use crate::state::AppState;

/// Request headers copied to the upstream call.
const FORWARDED_HEADERS: [&str; 3] = ["authorization", "cookie", "accept-language"];

/// Errors produced while proxying a chatbot request.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    ClientBuild(String),

    /// The upstream request failed before a response arrived.
    #[error("chatbot service unreachable: {0}")]
    Upstream(String),

    /// The upstream response body could not be read.
    #[error("chatbot service response unreadable: {0}")]
    Body(String),
}

/// Upstream response relayed to the browser.
#[derive(Debug)]
pub struct Forwarded {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Bytes,
}

pub struct BotProxy {
    http: reqwest::Client,
    upstream: String,
}

impl BotProxy {
    /// Build a proxy for `upstream` with the given timeouts.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(upstream: impl Into<String>, timeouts: BotTimeouts) -> Result<Self, ProxyError> {
        let http = reqwest::Client::builder()
            .timeout(timeouts.request())
            .connect_timeout(timeouts.connect())
            .build()
            .map_err(|e| ProxyError::ClientBuild(e.to_string()))?;
        Ok(Self { http, upstream: upstream.into() })
    }

    pub fn upstream(&self) -> &str {
        &self.upstream
    }

    /// POST `body` to the chatbot service and capture its response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be read.
    /// Non-success statuses are not errors; they are relayed as-is.
    pub async fn forward(&self, headers: &HeaderMap, body: Bytes) -> Result<Forwarded, ProxyError> {
        let mut request = self
            .http
            .post(&self.upstream)
            .header("content-type", "application/json")
            .body(body);
        for name in FORWARDED_HEADERS {
            if let Some(value) = headers.get(name).and_then(|v| v.to_str().ok()) {
                request = request.header(name, value);
            }
        }

        let resp = request.send().await.map_err(|e| ProxyError::Upstream(e.to_string()))?;
        let status = StatusCode::from_u16(resp.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
        let content_type = resp
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let body = resp.bytes().await.map_err(|e| ProxyError::Body(e.to_string()))?;

        Ok(Forwarded { status, content_type, body })
    }
}

impl IntoResponse for Forwarded {
    fn into_response(self) -> Response {
        let content_type = self.content_type.unwrap_or_else(|| "application/json".to_owned());
        (self.status, [(header::CONTENT_TYPE, content_type)], self.body).into_response()
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.to_string() });
        (StatusCode::BAD_GATEWAY, axum::Json(body)).into_response()
    }
}

/// `POST /api/chatbot/`: relay the widget's request to the chatbot service.
pub async fn chatbot(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    let started = Instant::now();
    match state.proxy.forward(&headers, body).await {
        Ok(forwarded) => {
            tracing::info!(
                status = forwarded.status.as_u16(),
                elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
                "chatbot request relayed"
            );
            forwarded.into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, upstream = state.proxy.upstream(), "chatbot request failed");
            e.into_response()
        }
    }
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;

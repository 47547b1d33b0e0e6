//! Wire contract with the analysis endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::error::{SubmitError, DEFAULT_API_ERROR_MESSAGE, DEFAULT_FAILURE_MESSAGE};
use crate::input::InputMode;

/// Body of `POST /api/analyze`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(rename = "type")]
    pub kind: InputMode,
    pub content: String,
}

impl AnalyzeRequest {
    pub fn new(kind: InputMode, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
        }
    }
}

/// Status and raw body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request never produced a reply (DNS, CORS, connection refused...).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Sends one JSON POST and resolves to whatever the server answered.
///
/// Non-2xx statuses are replies, not errors.
#[allow(async_fn_in_trait)]
pub trait AnalyzeTransport {
    async fn post_json(&self, url: &str, body: &str) -> Result<HttpReply, TransportError>;
}

/// Message for a non-2xx reply: its `error` field verbatim, else the default.
pub fn api_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .as_ref()
        .and_then(|v| v.get("error"))
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| DEFAULT_API_ERROR_MESSAGE.to_string())
}

/// Turns a reply into the JSON object worth storing, or the error to show.
pub fn classify_reply(reply: &HttpReply) -> Result<Value, SubmitError> {
    if !reply.is_success() {
        return Err(SubmitError::Api(api_error_message(&reply.body)));
    }

    let value: Value = serde_json::from_str(&reply.body)
        .map_err(|_| SubmitError::Network(DEFAULT_FAILURE_MESSAGE.to_string()))?;

    if !value.is_object() {
        return Err(SubmitError::EmptyResult);
    }
    Ok(value)
}

//! Client error types.

use std::fmt;

use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by every hub operation.
///
/// Nothing here is retried or logged by the client; the caller gets the
/// error exactly once and decides.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The cancellation token fired before or during the request.
    #[error("request cancelled")]
    Cancelled,

    /// Connection, DNS, TLS or timeout failure below HTTP.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The hub answered 404 Not Found.
    #[error("not found: {0}")]
    NotFound(StatusError),

    /// The hub answered 400 Bad Request.
    #[error("invalid request: {0}")]
    Invalid(StatusError),

    /// The hub answered with any other status outside the expected set.
    #[error("unexpected response: {0}")]
    Status(StatusError),

    /// The request body could not be serialized.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The response body did not match the expected resource shape.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// The hub base URL is not an absolute http(s) URL.
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// A caller-supplied header name or value is not valid HTTP.
    #[error("invalid header '{name}': {reason}")]
    InvalidHeader { name: String, reason: String },
}

impl ClientError {
    /// HTTP status carried by the error, if the hub answered at all.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::NotFound(err) | Self::Invalid(err) | Self::Status(err) => Some(err.status),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// A response whose status was outside the operation's expected set.
#[derive(Debug, Clone)]
pub struct StatusError {
    pub status: StatusCode,
    /// Raw response body, lossily decoded as UTF-8.
    pub body: String,
    /// The body parsed as JSON, when it is JSON.
    pub payload: Option<serde_json::Value>,
}

impl StatusError {
    #[must_use]
    pub fn new(status: StatusCode, body: &[u8]) -> Self {
        Self {
            status,
            body: String::from_utf8_lossy(body).into_owned(),
            payload: serde_json::from_slice(body).ok(),
        }
    }

    /// Human-readable message from the error payload.
    ///
    /// The hub reports `{"type", "code", "message"}`; some proxies answer
    /// `{"error": "..."}` instead. Both are recognized.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        let payload = self.payload.as_ref()?;
        payload
            .get("message")
            .or_else(|| payload.get("error"))
            .and_then(serde_json::Value::as_str)
    }

    /// Machine-readable error type from the payload, e.g. `not_found`.
    #[must_use]
    pub fn kind(&self) -> Option<&str> {
        self.payload
            .as_ref()?
            .get("type")
            .and_then(serde_json::Value::as_str)
    }
}

impl fmt::Display for StatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(message) = self.message() {
            write!(f, ": {message}")
        } else if !self.body.trim().is_empty() {
            write!(f, ": {}", self.body.trim())
        } else {
            Ok(())
        }
    }
}

//! Error Types
//!
//! Failures surfaced by the API client and the browser platform layer.

use thiserror::Error;

/// Failure of a single API call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response (fetch rejected)
    #[error("network error: {0}")]
    Transport(String),

    /// Non-2xx response; `message` is already resolved from the body or
    /// falls back to `HTTP {status}`
    #[error("{message}")]
    Http { status: u16, message: String },

    /// 2xx response whose body did not match the expected shape
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// Request body could not be encoded
    #[error("failed to encode request: {0}")]
    Serialize(String),
}

impl ApiError {
    /// Text that may be shown to the user as-is.
    ///
    /// Only HTTP errors carry a server-facing message; everything else gets
    /// the caller's localized fallback.
    pub fn user_message(&self) -> Option<&str> {
        match self {
            ApiError::Http { message, .. } => Some(message),
            _ => None,
        }
    }
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        ApiError::Transport(err.0)
    }
}

/// Raised by an `HttpTransport` when no response was received
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Browser capability failures (clipboard, DOM access)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlatformError {
    #[error("clipboard API unavailable")]
    ClipboardUnavailable,

    #[error("clipboard write failed: {0}")]
    ClipboardWrite(String),

    #[error("DOM error: {0}")]
    Dom(String),
}

//! Error types for ledgerkit
//!
//! This module defines the error hierarchy for the entire SDK.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! The taxonomy splits failures into three families the engine treats
//! differently:
//! - request errors (4xx, server-supplied error code) are permanent and
//!   terminate the current query or consume loop,
//! - server errors (5xx, timeout, connection failure) are transient and are
//!   retried only by the feed consume loop,
//! - handler errors (the caller's per-item callback failed) abort
//!   immediately and propagate as-is.

use thiserror::Error;

/// The main error type for ledgerkit
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Transport Errors (transient)
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Server error {status}: {body}")]
    Server { status: u16, body: String },

    // ============================================================================
    // Request Errors (permanent, client-caused)
    // ============================================================================
    #[error("Request failed ({status}) {code}: {message}")]
    Request {
        status: u16,
        code: String,
        message: String,
    },

    // ============================================================================
    // Data Errors
    // ============================================================================
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    // ============================================================================
    // Handler Errors
    // ============================================================================
    #[error("Handler failed: {message}")]
    Handler { message: String },

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a request error from a status and server error body
    pub fn request(status: u16, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Request {
            status,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Create a server error
    pub fn server(status: u16, body: impl Into<String>) -> Self {
        Self::Server {
            status,
            body: body.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a handler error
    pub fn handler(message: impl Into<String>) -> Self {
        Self::Handler {
            message: message.into(),
        }
    }

    /// Check if this error is transient and safe to retry.
    ///
    /// Only the feed consume loop retries; one-shot queries propagate
    /// these immediately.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Error::Http(_) | Error::Timeout { .. } | Error::Server { .. }
        )
    }

    /// Check if this error is the server's not-found response, e.g. a poll
    /// against a deleted feed.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Request { status, code, .. } => *status == 404 || code == "SEQ002",
            _ => false,
        }
    }
}

/// Result type alias for ledgerkit
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::request(400, "SEQ008", "malformed filter");
        assert_eq!(
            err.to_string(),
            "Request failed (400) SEQ008: malformed filter"
        );

        let err = Error::server(503, "unavailable");
        assert_eq!(err.to_string(), "Server error 503: unavailable");
    }

    #[test]
    fn test_is_retryable() {
        assert!(Error::Timeout { timeout_ms: 1000 }.is_retryable());
        assert!(Error::server(500, "").is_retryable());
        assert!(Error::server(503, "").is_retryable());

        assert!(!Error::request(400, "SEQ008", "").is_retryable());
        assert!(!Error::request(404, "SEQ002", "").is_retryable());
        assert!(!Error::handler("boom").is_retryable());
        assert!(!Error::config("test").is_retryable());
    }

    #[test]
    fn test_is_not_found() {
        assert!(Error::request(404, "", "no such feed").is_not_found());
        assert!(Error::request(400, "SEQ002", "not found").is_not_found());

        assert!(!Error::request(400, "SEQ008", "bad filter").is_not_found());
        assert!(!Error::server(500, "").is_not_found());
    }
}
